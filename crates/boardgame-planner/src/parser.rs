//! Filter string parsing.
//!
//! A filter is a comma-separated list of `field operator value` clauses,
//! combined with AND:
//!
//! ```text
//! minPlayers >= 2, max_play_time <= 60, name ~= cat
//! ```
//!
//! Field names are matched ignoring case and underscores. The value is split
//! off at the operator token, so a value that itself contains the token (a
//! name with `>=` in it, say) cannot be expressed.

use log::{debug, trace};

use crate::clause::{Clause, ClauseValue, Predicate};
use crate::error::{PlannerError, Result};
use crate::game::{normalize_field_name, GameField};
use crate::op::Op;

/// Parses a filter string into one predicate per clause, in clause order.
///
/// An empty or whitespace-only filter yields a single [`Predicate::Always`].
/// If any clause is invalid the whole filter is rejected.
///
/// ```
/// use boardgame_planner::{parse, Predicate};
///
/// let preds = parse("rating > 7, name ~= go").unwrap();
/// assert_eq!(preds.len(), 2);
///
/// assert_eq!(parse("  ").unwrap(), vec![Predicate::Always]);
/// assert!(parse("rating is high").is_err());
/// ```
pub fn parse(filter: &str) -> Result<Vec<Predicate>> {
    if filter.trim().is_empty() {
        return Ok(vec![Predicate::Always]);
    }

    let predicates = filter
        .split(',')
        .map(|raw| parse_clause(raw.trim()).map(Predicate::Clause))
        .collect::<Result<Vec<_>>>()?;

    debug!("parsed filter {:?} into {} clause(s)", filter, predicates.len());
    Ok(predicates)
}

/// Parses a single trimmed `field operator value` clause.
pub fn parse_clause(clause: &str) -> Result<Clause> {
    let op = Op::detect(clause)
        .ok_or_else(|| PlannerError::parse(clause, "unsupported or missing operator"))?;

    let parts: Vec<&str> = clause.split(op.token()).map(str::trim).collect();
    let (field_text, value_text) = match parts.as_slice() {
        [field, value] if !field.is_empty() && !value.is_empty() => (*field, *value),
        _ => {
            return Err(PlannerError::parse(
                clause,
                format!("expected 'field {} value'", op.token()),
            ))
        }
    };

    let field = GameField::from_filter_name(&normalize_field_name(field_text))
        .ok_or_else(|| PlannerError::parse(clause, format!("unknown field '{}'", field_text)))?;

    let value = ClauseValue::parse(field, value_text)?;
    trace!("clause {:?} -> {} {} {:?}", clause, field, op, value);

    Clause::new(field, op, value)
}
