//! Ordering types for result sorting.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for a field plus a
//! direction, and [`sort_games`] which applies one to a result list.

use std::cmp::Ordering;

use log::debug;

use crate::error::{PlannerError, Result};
use crate::game::{BoardGame, GameField};
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Maps the `ascending` flag used by front ends to a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field and direction to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: GameField,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ordering with the given direction.
    pub fn new(field: GameField, dir: Dir) -> Self {
        OrderBy { field, dir }
    }

    /// Compares two records according to this ordering.
    ///
    /// `Desc` reverses the comparator, so records that tie on the field keep
    /// their input order under a stable sort in both directions.
    pub fn compare(&self, a: &BoardGame, b: &BoardGame) -> Ordering {
        self.dir.apply(compare_values(
            &self.field.value(a),
            &self.field.value(b),
        ))
    }
}

/// Compares two field values.
///
/// Text compares case-insensitively. Numbers use a total order, with NaN
/// after every other number.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => compare_ignore_case(a, b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(*b),
        // Both sides come from the same field, so kinds always agree.
        (Value::String(_), Value::Number(_)) => Ordering::Greater,
        (Value::Number(_), Value::String(_)) => Ordering::Less,
    }
}

/// Case-insensitive string ordering.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Stable-sorts `games` by `key` in direction `dir`.
///
/// A missing key is an [`PlannerError::InvalidArgument`] error: sorting is
/// never silently skipped.
///
/// ```
/// use boardgame_planner::{sort_games, BoardGame, Dir, GameField};
///
/// let a = BoardGame::new("A", 1, 2, 4, 30, 60, 2.0, 3, 7.0, 2000);
/// let b = BoardGame::new("B", 2, 4, 6, 30, 60, 3.0, 1, 9.0, 2001);
///
/// let sorted = sort_games(vec![&a, &b], Some(GameField::Rank), Dir::Asc).unwrap();
/// assert_eq!(sorted[0].name(), "B");
/// assert!(sort_games(vec![&a, &b], None, Dir::Asc).is_err());
/// ```
pub fn sort_games<'a>(
    mut games: Vec<&'a BoardGame>,
    key: Option<GameField>,
    dir: Dir,
) -> Result<Vec<&'a BoardGame>> {
    let field = key.ok_or_else(|| PlannerError::invalid("sort field cannot be empty"))?;
    let order = OrderBy::new(field, dir);

    games.sort_by(|a, b| order.compare(a, b));
    debug!("sorted {} game(s) by {} {}", games.len(), field, dir);
    Ok(games)
}
