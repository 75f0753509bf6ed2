//! Query engine over a fixed game collection.
//!
//! The [`Planner`] owns the full collection and answers filter and sort
//! requests against it. Results borrow from the planner, so a
//! [`GameList`](crate::GameList) built from them holds references, not copies.

use log::{debug, warn};

use crate::clause::{all_match, Predicate};
use crate::error::Result;
use crate::game::{BoardGame, GameField};
use crate::ordering::{sort_games, Dir};
use crate::parser::parse;

/// A fixed collection of games with filter and sort operations.
///
/// The collection has set semantics: records equal to an earlier one are
/// dropped at construction. Iteration order is first-insertion order.
///
/// # Example
///
/// ```
/// use boardgame_planner::{BoardGame, Dir, GameField, Planner};
///
/// let planner = Planner::new(vec![
///     BoardGame::new("A", 1, 2, 4, 30, 60, 2.0, 3, 7.0, 2000),
///     BoardGame::new("B", 2, 4, 6, 30, 60, 3.0, 1, 9.0, 2001),
///     BoardGame::new("C", 3, 2, 4, 30, 60, 1.0, 2, 5.0, 2002),
/// ]);
///
/// let found = planner.filter("minplayers == 2").unwrap();
/// assert_eq!(found.len(), 2);
///
/// let sorted = planner
///     .filter_and_sort_by("", Some(GameField::Rating), Dir::Desc)
///     .unwrap();
/// let names: Vec<_> = sorted.iter().map(|g| g.name()).collect();
/// assert_eq!(names, ["B", "A", "C"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    games: Vec<BoardGame>,
}

impl Planner {
    /// Creates a planner over `games`, dropping duplicate records.
    pub fn new(games: impl IntoIterator<Item = BoardGame>) -> Self {
        let mut unique: Vec<BoardGame> = Vec::new();
        let mut dropped = 0usize;
        for game in games {
            if unique.contains(&game) {
                dropped += 1;
            } else {
                unique.push(game);
            }
        }
        if dropped > 0 {
            warn!("dropped {} duplicate game record(s)", dropped);
        }
        Planner { games: unique }
    }

    /// All games, in backing order.
    pub fn games(&self) -> &[BoardGame] {
        &self.games
    }

    /// Number of games in the collection.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Returns `true` if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Returns `true` if `game` satisfies every clause of `filter`.
    pub fn matches(&self, game: &BoardGame, filter: &str) -> Result<bool> {
        let predicates = parse(filter)?;
        Ok(all_match(&predicates, game))
    }

    /// Returns the games matching `filter`, in backing order.
    pub fn filter(&self, filter: &str) -> Result<Vec<&BoardGame>> {
        let predicates = parse(filter)?;
        let results = self.apply(&predicates);
        debug!(
            "filter {:?} matched {} of {} game(s)",
            filter,
            results.len(),
            self.games.len()
        );
        Ok(results)
    }

    /// Filters, then sorts ascending by `sort_on`.
    pub fn filter_and_sort(
        &self,
        filter: &str,
        sort_on: Option<GameField>,
    ) -> Result<Vec<&BoardGame>> {
        self.filter_and_sort_by(filter, sort_on, Dir::Asc)
    }

    /// Filters, then sorts by `sort_on` in direction `dir`.
    pub fn filter_and_sort_by(
        &self,
        filter: &str,
        sort_on: Option<GameField>,
        dir: Dir,
    ) -> Result<Vec<&BoardGame>> {
        let filtered = self.filter(filter)?;
        sort_games(filtered, sort_on, dir)
    }

    fn apply(&self, predicates: &[Predicate]) -> Vec<&BoardGame> {
        self.games
            .iter()
            .filter(|game| all_match(predicates, game))
            .collect()
    }
}

impl FromIterator<BoardGame> for Planner {
    fn from_iter<I: IntoIterator<Item = BoardGame>>(iter: I) -> Self {
        Planner::new(iter)
    }
}
