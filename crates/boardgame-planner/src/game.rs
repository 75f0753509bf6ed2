//! The board game record and its field table.
//!
//! [`BoardGame`] is the read-only record every other module works over.
//! [`GameField`] is the single place that knows, for each queryable field,
//! how to read it, what type it holds, and what it is called in filter
//! strings and CSV headers.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PlannerError;
use crate::value::{Number, Value};

/// A board game record.
///
/// Equality compares every field, so two distinct games that happen to share
/// a name are still different records. Float fields compare by value with
/// every NaN equal to every other NaN, so a record always equals itself.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardGame {
    #[serde(rename = "objectname")]
    name: String,
    id: i32,
    #[serde(rename = "minplayers")]
    min_players: i32,
    #[serde(rename = "maxplayers")]
    max_players: i32,
    #[serde(rename = "minplaytime")]
    min_play_time: i32,
    #[serde(rename = "maxplaytime")]
    max_play_time: i32,
    #[serde(rename = "avgweight")]
    difficulty: f64,
    rank: i32,
    #[serde(rename = "average")]
    rating: f64,
    #[serde(rename = "yearpublished")]
    year_published: i32,
}

impl BoardGame {
    /// Creates a record. Argument order follows the CSV column order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        id: i32,
        min_players: i32,
        max_players: i32,
        min_play_time: i32,
        max_play_time: i32,
        difficulty: f64,
        rank: i32,
        rating: f64,
        year_published: i32,
    ) -> Self {
        BoardGame {
            name: name.into(),
            id,
            min_players,
            max_players,
            min_play_time,
            max_play_time,
            difficulty,
            rank,
            rating,
            year_published,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn min_players(&self) -> i32 {
        self.min_players
    }

    pub fn max_players(&self) -> i32 {
        self.max_players
    }

    /// Minimum play time in minutes.
    pub fn min_play_time(&self) -> i32 {
        self.min_play_time
    }

    /// Maximum play time in minutes.
    pub fn max_play_time(&self) -> i32 {
        self.max_play_time
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }
}

/// Bitwise float identity, with all NaNs collapsed into one value.
fn same_float(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

impl PartialEq for BoardGame {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.id == other.id
            && self.min_players == other.min_players
            && self.max_players == other.max_players
            && self.min_play_time == other.min_play_time
            && self.max_play_time == other.max_play_time
            && same_float(self.difficulty, other.difficulty)
            && self.rank == other.rank
            && same_float(self.rating, other.rating)
            && self.year_published == other.year_published
    }
}

impl Eq for BoardGame {}

/// Value type stored in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
        }
    }
}

/// A queryable and sortable field of [`BoardGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameField {
    Name,
    MinPlayers,
    MaxPlayers,
    MinPlayTime,
    MaxPlayTime,
    Difficulty,
    Rank,
    Rating,
    YearPublished,
}

const ALL_FIELDS: [GameField; 9] = [
    GameField::Name,
    GameField::MinPlayers,
    GameField::MaxPlayers,
    GameField::MinPlayTime,
    GameField::MaxPlayTime,
    GameField::Difficulty,
    GameField::Rank,
    GameField::Rating,
    GameField::YearPublished,
];

impl GameField {
    /// All fields, in record order.
    pub fn all() -> &'static [GameField] {
        &ALL_FIELDS
    }

    /// Type tag consulted by the parser (how to read the value text) and the
    /// clause builder (which operators apply).
    pub fn kind(self) -> FieldKind {
        match self {
            GameField::Name => FieldKind::Text,
            GameField::Difficulty | GameField::Rating => FieldKind::Float,
            _ => FieldKind::Integer,
        }
    }

    /// Reads this field from a record.
    pub fn value(self, game: &BoardGame) -> Value<'_> {
        match self {
            GameField::Name => Value::String(&game.name),
            GameField::MinPlayers => Value::Number(game.min_players.into()),
            GameField::MaxPlayers => Value::Number(game.max_players.into()),
            GameField::MinPlayTime => Value::Number(game.min_play_time.into()),
            GameField::MaxPlayTime => Value::Number(game.max_play_time.into()),
            GameField::Difficulty => Value::Number(Number::F64(game.difficulty)),
            GameField::Rank => Value::Number(game.rank.into()),
            GameField::Rating => Value::Number(Number::F64(game.rating)),
            GameField::YearPublished => Value::Number(game.year_published.into()),
        }
    }

    /// Normalized name used in filter strings (lowercase, no underscores).
    pub fn filter_name(self) -> &'static str {
        match self {
            GameField::Name => "name",
            GameField::MinPlayers => "minplayers",
            GameField::MaxPlayers => "maxplayers",
            GameField::MinPlayTime => "minplaytime",
            GameField::MaxPlayTime => "maxplaytime",
            GameField::Difficulty => "difficulty",
            GameField::Rank => "rank",
            GameField::Rating => "rating",
            GameField::YearPublished => "yearpublished",
        }
    }

    /// Header of the matching column in a collection CSV export.
    pub fn column_name(self) -> &'static str {
        match self {
            GameField::Name => "objectname",
            GameField::Difficulty => "avgweight",
            GameField::Rating => "average",
            other => other.filter_name(),
        }
    }

    /// Resolves an already-normalized filter field name.
    pub fn from_filter_name(normalized: &str) -> Option<GameField> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|field| field.filter_name() == normalized)
    }
}

/// Strips underscores and lowercases a field name.
pub(crate) fn normalize_field_name(name: &str) -> String {
    name.replace('_', "").to_lowercase()
}

impl fmt::Display for GameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filter_name())
    }
}

impl FromStr for GameField {
    type Err = PlannerError;

    /// Accepts filter names, CSV column names, and the short forms
    /// `mintime`, `maxtime` and `year`, case and underscore insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_field_name(s.trim());
        if let Some(field) = GameField::from_filter_name(&normalized) {
            return Ok(field);
        }
        let field = match normalized.as_str() {
            "objectname" => GameField::Name,
            "avgweight" => GameField::Difficulty,
            "average" => GameField::Rating,
            "mintime" => GameField::MinPlayTime,
            "maxtime" => GameField::MaxPlayTime,
            "year" => GameField::YearPublished,
            _ => {
                return Err(PlannerError::invalid(format!(
                    "unsupported sort field: {}",
                    s
                )))
            }
        };
        Ok(field)
    }
}
