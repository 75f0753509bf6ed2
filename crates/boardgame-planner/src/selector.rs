//! Selector grammar for adding to and removing from a game list.
//!
//! | Selector | Meaning |
//! |----------|---------|
//! | `all` | every game in the view |
//! | `3` | the third game (1-based) |
//! | `2-5` | games 2 through 5, inclusive; the end is clamped |
//! | anything else | a game name |

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PlannerError, Result};

/// Reserved selector that targets every game.
pub const ALL: &str = "all";

/// A classified selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The reserved `all` token.
    All,
    /// A 1-based index. Digits too large for `usize` become `usize::MAX`.
    Index(usize),
    /// A 1-based inclusive range, as written.
    Range { start: usize, end: usize },
    /// Free text, treated as a game name.
    Text(String),
}

fn index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("valid index regex"))
}

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)-(\d+)$").expect("valid range regex"))
}

/// Parses a digit run, saturating on overflow so the bounds check rejects it.
fn parse_position(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

impl Selector {
    /// Classifies `text` (trimmed). Never fails: anything unrecognized is
    /// [`Selector::Text`].
    pub fn parse(text: &str) -> Selector {
        let text = text.trim();
        if text.eq_ignore_ascii_case(ALL) {
            return Selector::All;
        }
        if index_pattern().is_match(text) {
            return Selector::Index(parse_position(text));
        }
        if let Some(caps) = range_pattern().captures(text) {
            return Selector::Range {
                start: parse_position(&caps[1]),
                end: parse_position(&caps[2]),
            };
        }
        Selector::Text(text.to_string())
    }

    /// Resolves an index or range against a sequence of `len` items,
    /// returning 0-based positions.
    ///
    /// Returns `Ok(None)` for `All` and `Text`, which are not positional.
    pub fn resolve(&self, len: usize) -> Result<Option<RangeInclusive<usize>>> {
        match *self {
            Selector::Index(index) => {
                check_bounds(index, len)?;
                Ok(Some(index - 1..=index - 1))
            }
            Selector::Range { start, end } => {
                if end < start {
                    return Err(PlannerError::invalid(format!(
                        "invalid range {}-{}: end is before start",
                        start, end
                    )));
                }
                check_bounds(start, len)?;
                Ok(Some(start - 1..=end.min(len) - 1))
            }
            Selector::All | Selector::Text(_) => Ok(None),
        }
    }
}

fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index == 0 || index > len {
        Err(PlannerError::Index { index, len })
    } else {
        Ok(())
    }
}
