//! Comparison operators for filter clauses.
//!
//! The [`Op`] enum defines the seven supported operators and their textual
//! tokens. Not all operators are valid for all fields: `Contains` only applies
//! to text.

use std::cmp::Ordering;

/// Comparison operator for a filter clause.
///
/// - **Universal**: `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` work on text and numbers
/// - **Text only**: `Contains`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (`==`).
    Eq,
    /// Not equal (`!=`).
    Ne,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Lte,
    /// Case-insensitive substring (`~=`).
    Contains,
}

/// Detection order. Two-character tokens come before `>` and `<` so that
/// `>=` is never read as `>`.
const DETECT_ORDER: [Op; 7] = [
    Op::Gte,
    Op::Lte,
    Op::Eq,
    Op::Ne,
    Op::Contains,
    Op::Gt,
    Op::Lt,
];

impl Op {
    /// All operators, in detection order.
    pub fn all() -> &'static [Op] {
        &DETECT_ORDER
    }

    /// Returns the operator whose token appears in `clause`, if any.
    ///
    /// ```
    /// use boardgame_planner::Op;
    ///
    /// assert_eq!(Op::detect("rating >= 7.5"), Some(Op::Gte));
    /// assert_eq!(Op::detect("rank > 10"), Some(Op::Gt));
    /// assert_eq!(Op::detect("name is Go"), None);
    /// ```
    pub fn detect(clause: &str) -> Option<Op> {
        DETECT_ORDER
            .iter()
            .copied()
            .find(|op| clause.contains(op.token()))
    }

    /// Returns the textual token used in filter strings.
    pub fn token(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Contains => "~=",
        }
    }

    /// Returns `true` if this operator is valid for the text field.
    pub fn is_text_op(self) -> bool {
        true
    }

    /// Returns `true` if this operator is valid for numeric fields.
    pub fn is_number_op(self) -> bool {
        !matches!(self, Op::Contains)
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// `field.cmp(value)` is the expected argument, so `Gt` means the field is
    /// greater than the clause value.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false, // Not an ordering-based operator
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "EQUALS",
            Op::Ne => "NOT_EQUALS",
            Op::Gt => "GREATER_THAN",
            Op::Gte => "GREATER_THAN_EQUALS",
            Op::Lt => "LESS_THAN",
            Op::Lte => "LESS_THAN_EQUALS",
            Op::Contains => "CONTAINS",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
