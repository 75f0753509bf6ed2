//! Clause types for filter predicates.
//!
//! A [`Clause`] is a single test: a field, an operator, and a comparison
//! value. Clauses are validated when built, so an operator that does not
//! apply to a field is rejected up front instead of silently never matching.
//! A [`Predicate`] is what the filter parser hands out: either a clause or
//! the match-everything predicate of an empty filter.

use crate::error::{NumberParseError, PlannerError, Result};
use crate::game::{BoardGame, FieldKind, GameField};
use crate::op::Op;
use crate::value::{Number, Value};

/// A single validated filter test.
///
/// # Example
///
/// ```
/// use boardgame_planner::{BoardGame, Clause, GameField, Op};
///
/// let clause = Clause::new(GameField::Name, Op::Contains, "go").unwrap();
/// let game = BoardGame::new("Go Fish", 2, 2, 10, 20, 120, 3.0, 200, 6.5, 2001);
/// assert!(clause.matches(&game));
///
/// assert!(Clause::new(GameField::Rank, Op::Contains, 5i32).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    field: GameField,
    op: Op,
    value: ClauseValue,
}

impl Clause {
    /// Creates a clause, checking that `op` and the value type suit `field`.
    pub fn new(field: GameField, op: Op, value: impl Into<ClauseValue>) -> Result<Self> {
        let value = value.into();
        let kind = field.kind();

        let op_ok = match kind {
            FieldKind::Text => op.is_text_op(),
            FieldKind::Integer | FieldKind::Float => op.is_number_op(),
        };
        if !op_ok {
            return Err(PlannerError::UnsupportedOperation {
                field: field.filter_name(),
                op: op.as_str(),
            });
        }

        let value = match (kind, value) {
            // Text comparisons are case-insensitive; fold once here.
            (FieldKind::Text, ClauseValue::String(s)) => ClauseValue::String(s.to_lowercase()),
            (FieldKind::Integer, v @ ClauseValue::Number(Number::I64(_)))
            | (FieldKind::Float, v @ ClauseValue::Number(_)) => v,
            (kind, v) => {
                return Err(PlannerError::TypeMismatch {
                    expected: kind.as_str(),
                    actual: v.type_name(),
                })
            }
        };

        Ok(Clause { field, op, value })
    }

    /// The field this clause tests.
    pub fn field(&self) -> GameField {
        self.field
    }

    /// The comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The comparison value. Text values are stored lowercased.
    pub fn value(&self) -> &ClauseValue {
        &self.value
    }

    /// Evaluates this clause against a record.
    pub fn matches(&self, game: &BoardGame) -> bool {
        match (&self.value, self.field.value(game)) {
            (ClauseValue::String(pattern), Value::String(s)) => self.match_string(s, pattern),
            (ClauseValue::Number(clause_num), Value::Number(field_num)) => {
                self.match_number(field_num, *clause_num)
            }
            // Unreachable after validation in `new`.
            _ => false,
        }
    }

    fn match_string(&self, field: &str, folded_pattern: &str) -> bool {
        let field = field.to_lowercase();
        match self.op {
            Op::Contains => field.contains(folded_pattern),
            op => op.eval_ordering(field.as_str().cmp(folded_pattern)),
        }
    }

    fn match_number(&self, field: Number, clause: Number) -> bool {
        match field.compare(clause) {
            Some(ordering) => self.op.eval_ordering(ordering),
            // NaN: only "not equal" holds.
            None => self.op == Op::Ne,
        }
    }
}

/// Owned value for storage in a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// String value.
    String(String),
    /// Numeric value.
    Number(Number),
}

impl ClauseValue {
    /// Parses raw value text into the type `field` holds.
    ///
    /// Text fields take the value verbatim. Numeric text that does not parse
    /// is a [`PlannerError::Format`] error, never a default.
    pub fn parse(field: GameField, text: &str) -> Result<Self> {
        let format_err = |source: NumberParseError| PlannerError::Format {
            field: field.filter_name(),
            value: text.to_string(),
            source,
        };

        match field.kind() {
            FieldKind::Text => Ok(ClauseValue::String(text.to_string())),
            FieldKind::Integer => text
                .parse::<i64>()
                .map(|n| ClauseValue::Number(Number::I64(n)))
                .map_err(|e| format_err(e.into())),
            FieldKind::Float => text
                .parse::<f64>()
                .map(|n| ClauseValue::Number(Number::F64(n)))
                .map_err(|e| format_err(e.into())),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            ClauseValue::String(_) => "text",
            ClauseValue::Number(n) => Value::Number(*n).type_name(),
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<i32> for ClauseValue {
    fn from(n: i32) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

/// A single-record test produced by the filter parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every record. Produced for an empty filter.
    Always,
    /// Matches records satisfying the clause.
    Clause(Clause),
}

impl Predicate {
    /// Evaluates this predicate against a record.
    pub fn test(&self, game: &BoardGame) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Clause(clause) => clause.matches(game),
        }
    }
}

impl From<Clause> for Predicate {
    fn from(clause: Clause) -> Self {
        Predicate::Clause(clause)
    }
}

/// Returns `true` if every predicate holds for `game`. Short-circuits.
pub fn all_match(predicates: &[Predicate], game: &BoardGame) -> bool {
    predicates.iter().all(|p| p.test(game))
}
