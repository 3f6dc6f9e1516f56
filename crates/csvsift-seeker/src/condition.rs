//! Filter conditions.
//!
//! A [`Condition`] is one parsed `--filter` expression: a column name, an
//! operator, and a comparison value.

use std::str::FromStr;

use crate::error::{Result, SeekerError};
use crate::op::Op;
use crate::value::{Number, Value};

const OPERATOR_CHARS: [char; 4] = ['<', '>', '=', '!'];

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use csvsift_seeker::{Condition, Op};
///
/// let cond: Condition = "price>=149".parse().unwrap();
/// assert_eq!(cond.column(), "price");
/// assert_eq!(cond.op(), Op::Gte);
/// assert_eq!(cond.value(), "149");
///
/// assert!(cond.matches("999"));
/// assert!(!cond.matches("99"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    column: String,
    op: Op,
    value: String,
    number: Option<Number>,
}

impl Condition {
    /// Creates a new condition.
    pub fn new(column: impl Into<String>, op: Op, value: impl Into<String>) -> Self {
        let value = value.into();
        let number = Number::parse(&value);
        Condition {
            column: column.into(),
            op,
            value,
            number,
        }
    }

    /// Parses a `column<op>value` expression.
    ///
    /// The split happens at the first operator token in the string; at that
    /// position the longest token wins, so `a>=1` is `a`, `>=`, `1`.
    /// Column and value are trimmed and must not be empty. The value may
    /// not contain `<`, `>`, `=` or `!`, so `price==5` is rejected instead
    /// of comparing against `"=5"`.
    pub fn parse(input: &str) -> Result<Self> {
        let (start, op) = input
            .char_indices()
            .find_map(|(i, _)| Op::match_prefix(&input[i..]).map(|op| (i, op)))
            .ok_or_else(|| SeekerError::syntax("filter", input, "no comparison operator found"))?;

        let column = input[..start].trim();
        let value = input[start + op.token().len()..].trim();

        if column.is_empty() {
            return Err(SeekerError::syntax("filter", input, "column name is empty"));
        }
        if value.is_empty() {
            return Err(SeekerError::syntax("filter", input, "comparison value is empty"));
        }
        if value.contains(OPERATOR_CHARS) {
            return Err(SeekerError::syntax(
                "filter",
                input,
                "comparison value contains an operator character",
            ));
        }

        Ok(Condition::new(column, op, value))
    }

    /// The column this condition reads.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The comparison value, as written.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Evaluates this condition against a raw field value.
    ///
    /// Both sides numeric: compare by value. Otherwise: compare the raw
    /// text lexicographically.
    pub fn matches(&self, field: &str) -> bool {
        match (Value::classify(field), self.number) {
            (Value::Number(field_num), Some(clause_num)) => {
                self.match_number(field_num, clause_num)
            }
            _ => self.match_string(field),
        }
    }

    fn match_number(&self, field: Number, clause: Number) -> bool {
        match field.compare(clause) {
            Some(ordering) => self.op.eval_ordering(ordering),
            None => false,
        }
    }

    fn match_string(&self, field: &str) -> bool {
        self.op.eval_ordering(field.cmp(self.value.as_str()))
    }
}

impl FromStr for Condition {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Condition::parse(s)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.value)
    }
}
