//! The working list: a user-curated plan of games.
//!
//! A [`GameList`] is an ordered, duplicate-free set of games borrowed from a
//! [`Planner`](crate::Planner). Games are added from a filtered view and
//! removed from the list itself, both through the [selector](crate::Selector)
//! grammar.
//!
//! Every call validates its selector completely before touching the list,
//! so a failed add or remove leaves the list as it was.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{PlannerError, Result};
use crate::game::BoardGame;
use crate::ordering::compare_ignore_case;
use crate::selector::Selector;

/// An ordered, duplicate-free working list of games.
///
/// # Example
///
/// ```
/// use boardgame_planner::{BoardGame, GameList, Planner};
///
/// let planner = Planner::new(vec![
///     BoardGame::new("Chess", 1, 2, 2, 10, 20, 4.0, 7, 9.0, 1475),
///     BoardGame::new("Go", 2, 2, 2, 30, 90, 4.5, 3, 8.5, 1500),
///     BoardGame::new("Azul", 3, 2, 4, 30, 45, 1.8, 50, 7.8, 2017),
/// ]);
/// let view = planner.filter("").unwrap();
///
/// let mut list = GameList::new();
/// list.add_to_list("2-3", &view).unwrap();
/// list.add_to_list("chess", &view).unwrap();
/// assert_eq!(list.names(), ["Azul", "Chess", "Go"]);
///
/// list.remove_from_list("1").unwrap();
/// assert_eq!(list.count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameList<'a> {
    games: Vec<&'a BoardGame>,
}

fn same_name(a: &str, b: &str) -> bool {
    compare_ignore_case(a, b) == Ordering::Equal
}

impl<'a> GameList<'a> {
    /// Creates an empty list.
    pub fn new() -> Self {
        GameList { games: Vec::new() }
    }

    /// Adds games from `view` selected by `selector`. Returns how many games
    /// were newly added; games already present are skipped.
    ///
    /// Resolution order: a game name in `view` (case-insensitive), then
    /// `all`, then a 1-based index, then a 1-based inclusive range.
    pub fn add_to_list(&mut self, selector: &str, view: &[&'a BoardGame]) -> Result<usize> {
        let trimmed = selector.trim();

        if let Some(game) = view.iter().copied().find(|g| same_name(g.name(), trimmed)) {
            let added = self.push_all([game]);
            debug!("add {:?}: matched by name, {} added", trimmed, added);
            return Ok(added);
        }

        let parsed = Selector::parse(trimmed);
        let added = match &parsed {
            Selector::All => self.push_all(view.iter().copied()),
            Selector::Index(_) | Selector::Range { .. } => match parsed.resolve(view.len())? {
                Some(range) => self.push_all(view[range].iter().copied()),
                None => 0,
            },
            Selector::Text(text) => {
                return Err(PlannerError::invalid(format!(
                    "invalid selector: {}",
                    text
                )))
            }
        };

        debug!("add {:?}: {} of {} added", trimmed, added, view.len());
        Ok(added)
    }

    /// Removes games selected by `selector` from this list. Returns how many
    /// games were removed.
    ///
    /// Resolution order: `all` (clears the list), then a game name in the
    /// list, then a 1-based index, then a 1-based inclusive range.
    pub fn remove_from_list(&mut self, selector: &str) -> Result<usize> {
        let trimmed = selector.trim();
        let parsed = Selector::parse(trimmed);

        if parsed == Selector::All {
            let removed = self.games.len();
            self.clear();
            debug!("remove all: {} removed", removed);
            return Ok(removed);
        }

        if let Some(pos) = self.games.iter().position(|g| same_name(g.name(), trimmed)) {
            self.games.remove(pos);
            debug!("remove {:?}: matched by name", trimmed);
            return Ok(1);
        }

        let range = match &parsed {
            Selector::Index(_) | Selector::Range { .. } => parsed.resolve(self.games.len())?,
            _ => None,
        };
        let range = range.ok_or_else(|| {
            PlannerError::invalid(format!("game not found: {}", trimmed))
        })?;
        if range.is_empty() {
            return Err(PlannerError::invalid("no valid games to remove"));
        }

        let removed = self.games.drain(range).count();
        debug!("remove {:?}: {} removed", trimmed, removed);
        Ok(removed)
    }

    /// Number of games in the list.
    pub fn count(&self) -> usize {
        self.games.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Removes every game.
    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Games in insertion order.
    pub fn games(&self) -> &[&'a BoardGame] {
        &self.games
    }

    /// Game names sorted case-insensitively. Recomputed on every call.
    pub fn names(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = self.games.iter().map(|g| g.name()).collect();
        names.sort_by(|a, b| compare_ignore_case(a, b));
        names
    }

    /// Writes [`names`](Self::names) to `path`, one per line, replacing any
    /// existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        let names = self.names();
        for name in &names {
            writeln!(writer, "{}", name).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        info!("saved {} game(s) to {}", names.len(), path.display());
        Ok(())
    }

    fn push_all(&mut self, games: impl IntoIterator<Item = &'a BoardGame>) -> usize {
        let mut added = 0;
        for game in games {
            if !self.games.iter().any(|g| *g == game) {
                self.games.push(game);
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> Vec<BoardGame> {
        vec![
            BoardGame::new("Go", 1, 2, 5, 30, 30, 8.0, 100, 7.5, 2000),
            BoardGame::new("Chess", 7, 2, 2, 10, 20, 10.0, 700, 10.0, 2006),
            BoardGame::new("monopoly", 8, 6, 10, 20, 1000, 1.0, 800, 5.0, 2007),
        ]
    }

    fn view(games: &[BoardGame]) -> Vec<&BoardGame> {
        games.iter().collect()
    }

    #[test]
    fn add_by_name_case_insensitive() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        assert_eq!(list.add_to_list("CHESS", &view).unwrap(), 1);
        assert_eq!(list.names(), vec!["Chess"]);
    }

    #[test]
    fn add_is_idempotent() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("go", &view).unwrap();
        assert_eq!(list.add_to_list("go", &view).unwrap(), 0);
        assert_eq!(list.add_to_list("1", &view).unwrap(), 0);
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn add_all_preserves_view_order() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("2", &view).unwrap();
        assert_eq!(list.add_to_list("ALL", &view).unwrap(), 2);
        let order: Vec<_> = list.games().iter().map(|g| g.name()).collect();
        assert_eq!(order, vec!["Chess", "Go", "monopoly"]);
    }

    #[test]
    fn add_range_clamps_end() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        assert_eq!(list.add_to_list("2-10", &view).unwrap(), 2);
        let order: Vec<_> = list.games().iter().map(|g| g.name()).collect();
        assert_eq!(order, vec!["Chess", "monopoly"]);
    }

    #[test]
    fn add_rejects_bad_selectors_without_mutating() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("1", &view).unwrap();

        assert!(matches!(list.add_to_list("0", &view), Err(PlannerError::Index { .. })));
        assert!(matches!(list.add_to_list("4", &view), Err(PlannerError::Index { .. })));
        assert!(matches!(
            list.add_to_list("5-1", &view),
            Err(PlannerError::InvalidArgument(_))
        ));
        assert!(matches!(
            list.add_to_list("Catan", &view),
            Err(PlannerError::InvalidArgument(_))
        ));
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn name_wins_over_index() {
        let games = vec![
            BoardGame::new("Alpha", 1, 1, 1, 1, 1, 1.0, 1, 1.0, 2000),
            BoardGame::new("1", 2, 1, 1, 1, 1, 1.0, 2, 1.0, 2000),
        ];
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("1", &view).unwrap();
        assert_eq!(list.names(), vec!["1"]);
    }

    #[test]
    fn add_from_empty_view() {
        let mut list = GameList::new();
        assert_eq!(list.add_to_list("all", &[]).unwrap(), 0);
        assert!(matches!(list.add_to_list("1", &[]), Err(PlannerError::Index { .. })));
    }

    #[test]
    fn remove_all_clears() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("all", &view).unwrap();
        assert_eq!(list.remove_from_list("all").unwrap(), 3);
        assert_eq!(list.count(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_by_name_index_and_range() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("all", &view).unwrap();

        assert_eq!(list.remove_from_list("MONOPOLY").unwrap(), 1);
        assert_eq!(list.names(), vec!["Chess", "Go"]);

        list.add_to_list("monopoly", &view).unwrap();
        // List order is now Go, Chess, monopoly.
        assert_eq!(list.remove_from_list("2").unwrap(), 1);
        assert_eq!(list.names(), vec!["Go", "monopoly"]);

        assert_eq!(list.remove_from_list("1-9").unwrap(), 2);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_rejects_bad_selectors_without_mutating() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("all", &view).unwrap();

        assert!(matches!(list.remove_from_list("0"), Err(PlannerError::Index { .. })));
        assert!(matches!(list.remove_from_list("4-5"), Err(PlannerError::Index { .. })));
        assert!(matches!(
            list.remove_from_list("3-2"),
            Err(PlannerError::InvalidArgument(_))
        ));
        assert!(matches!(
            list.remove_from_list("Catan"),
            Err(PlannerError::InvalidArgument(_))
        ));
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn names_sorted_case_insensitively() {
        let games = games();
        let view = view(&games);
        let mut list = GameList::new();
        list.add_to_list("3", &view).unwrap();
        list.add_to_list("1", &view).unwrap();
        list.add_to_list("2", &view).unwrap();
        assert_eq!(list.names(), vec!["Chess", "Go", "monopoly"]);
    }

    #[test]
    fn nan_rated_game_added_once() {
        let games = vec![BoardGame::new("Unrated", 9, 2, 4, 30, 60, 2.0, 0, f64::NAN, 2024)];
        let view = view(&games);
        let mut list = GameList::new();
        assert_eq!(list.add_to_list("1", &view).unwrap(), 1);
        assert_eq!(list.add_to_list("unrated", &view).unwrap(), 0);
        assert_eq!(list.add_to_list("all", &view).unwrap(), 0);
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn same_name_distinct_games_both_kept() {
        let games = vec![
            BoardGame::new("Go", 1, 2, 2, 30, 30, 8.0, 100, 7.5, 2000),
            BoardGame::new("Go", 2, 2, 2, 30, 30, 8.0, 101, 7.5, 2000),
        ];
        let view = view(&games);
        let mut list = GameList::new();
        assert_eq!(list.add_to_list("all", &view).unwrap(), 2);
        assert_eq!(list.names(), vec!["Go", "Go"]);
    }
}
