//! Comparison operators for filter conditions.
//!
//! The [`Op`] enum defines the six operators accepted in a `--filter`
//! expression. Every operator works on both numbers and text: numbers
//! compare by value, text compares lexicographically.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::SeekerError;

/// Comparison operator for a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (`=`).
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
}

impl Op {
    /// All operators, two-character tokens first.
    ///
    /// Scanning in this order guarantees `>=` is never read as `>` followed
    /// by a value starting with `=`.
    pub const ALL: [Op; 6] = [Op::Gte, Op::Lte, Op::Ne, Op::Gt, Op::Lt, Op::Eq];

    /// Returns the token used for this operator in filter expressions.
    pub fn token(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
        }
    }

    /// Returns the operator whose token starts `input`, preferring the
    /// longest match.
    pub fn match_prefix(input: &str) -> Option<Op> {
        Op::ALL
            .into_iter()
            .find(|op| input.starts_with(op.token()))
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// The ordering is `field.cmp(condition_value)`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }
}

impl FromStr for Op {
    type Err = SeekerError;

    /// Parses an operator token such as `">="`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| SeekerError::UnknownOperator(s.to_string()))
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_eval_ordering() {
        // Equal
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));
        assert!(!Op::Eq.eval_ordering(Ordering::Greater));

        // Not equal
        assert!(!Op::Ne.eval_ordering(Ordering::Equal));
        assert!(Op::Ne.eval_ordering(Ordering::Less));
        assert!(Op::Ne.eval_ordering(Ordering::Greater));

        // Greater than
        assert!(!Op::Gt.eval_ordering(Ordering::Equal));
        assert!(!Op::Gt.eval_ordering(Ordering::Less));
        assert!(Op::Gt.eval_ordering(Ordering::Greater));

        // Greater than or equal
        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));
        assert!(Op::Gte.eval_ordering(Ordering::Greater));

        // Less than
        assert!(!Op::Lt.eval_ordering(Ordering::Equal));
        assert!(Op::Lt.eval_ordering(Ordering::Less));
        assert!(!Op::Lt.eval_ordering(Ordering::Greater));

        // Less than or equal
        assert!(Op::Lte.eval_ordering(Ordering::Equal));
        assert!(Op::Lte.eval_ordering(Ordering::Less));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));
    }

    #[test]
    fn match_prefix_prefers_two_char_tokens() {
        assert_eq!(Op::match_prefix(">=149"), Some(Op::Gte));
        assert_eq!(Op::match_prefix("<=1"), Some(Op::Lte));
        assert_eq!(Op::match_prefix("!=x"), Some(Op::Ne));
        assert_eq!(Op::match_prefix(">1"), Some(Op::Gt));
        assert_eq!(Op::match_prefix("<1"), Some(Op::Lt));
        assert_eq!(Op::match_prefix("=1"), Some(Op::Eq));
        assert_eq!(Op::match_prefix("price"), None);
        // A lone '!' is not an operator
        assert_eq!(Op::match_prefix("!x"), None);
    }

    #[test]
    fn op_from_str() {
        assert_eq!(">=".parse::<Op>().unwrap(), Op::Gte);
        assert_eq!("!=".parse::<Op>().unwrap(), Op::Ne);
        assert!(matches!(
            "??".parse::<Op>(),
            Err(SeekerError::UnknownOperator(tok)) if tok == "??"
        ));
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::Gte.to_string(), ">=");
        assert_eq!(Op::Ne.to_string(), "!=");
        assert_eq!(Op::Lt.as_str(), "lt");
    }
}
