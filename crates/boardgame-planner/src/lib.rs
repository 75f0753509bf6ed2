//! Board game planner - filter, sort and plan over a game collection.
//!
//! The crate answers textual queries against a fixed, in-memory collection of
//! [`BoardGame`] records and maintains a separate working list (a plan)
//! assembled from query results. It provides:
//!
//! - A filter grammar: comma-separated `field operator value` clauses, ANDed
//! - Stable sorting by any field, ascending or descending
//! - A working list edited by name, 1-based index, inclusive range, or `all`
//! - CSV loading of a collection and plain-text saving of a plan
//!
//! # Quick Start
//!
//! ```rust
//! use boardgame_planner::{BoardGame, Dir, GameField, GameList, Planner};
//!
//! let planner = Planner::new(vec![
//!     BoardGame::new("Go", 1, 2, 2, 30, 180, 3.9, 23, 7.6, -2200),
//!     BoardGame::new("Azul", 2, 2, 4, 30, 45, 1.8, 50, 7.8, 2017),
//!     BoardGame::new("Catan", 3, 3, 4, 60, 120, 2.3, 400, 7.1, 1995),
//! ]);
//!
//! let short = planner
//!     .filter_and_sort_by("maxplaytime <= 120", Some(GameField::Rating), Dir::Desc)
//!     .unwrap();
//! assert_eq!(short[0].name(), "Azul");
//!
//! let mut plan = GameList::new();
//! plan.add_to_list("all", &short).unwrap();
//! assert_eq!(plan.names(), ["Azul", "Catan"]);
//! ```
//!
//! # Filter Grammar
//!
//! ```text
//! filter = clause ("," clause)*
//! clause = field operator value
//! ```
//!
//! Field names ignore case and underscores (`min_players`, `MinPlayers`).
//! An empty filter matches everything.
//!
//! | Field | Type | Operators |
//! |-------|------|-----------|
//! | `name` | text, case-insensitive | `==` `!=` `>` `>=` `<` `<=` `~=` |
//! | `minplayers` `maxplayers` `minplaytime` `maxplaytime` `rank` `yearpublished` | integer | `==` `!=` `>` `>=` `<` `<=` |
//! | `difficulty` `rating` | float, exact equality | `==` `!=` `>` `>=` `<` `<=` |
//!
//! `~=` is a substring test. Floating-point `==` compares exactly, so values
//! that went through arithmetic may not match the literal you expect.

mod clause;
mod error;
mod game;
mod game_list;
mod loader;
mod op;
mod ordering;
mod parser;
mod planner;
mod selector;
mod value;

// Re-export public API
pub use clause::{all_match, Clause, ClauseValue, Predicate};
pub use error::{NumberParseError, PlannerError, Result};
pub use game::{BoardGame, FieldKind, GameField};
pub use game_list::GameList;
pub use loader::{load_games, load_games_from_reader};
pub use op::Op;
pub use ordering::{compare_ignore_case, compare_values, sort_games, Dir, OrderBy};
pub use parser::{parse, parse_clause};
pub use planner::Planner;
pub use selector::{Selector, ALL};
pub use value::{Number, Value};
