//! Single-column reductions.
//!
//! An [`AggregateSpec`] names a column and an [`Aggregate`] function. Applying
//! it to a filtered collection yields one [`Number`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SeekerError};
use crate::value::Number;

/// A named reduction function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    /// Arithmetic mean.
    Avg,
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// Arithmetic sum.
    Sum,
    /// Number of rows.
    Count,
}

impl Aggregate {
    /// All aggregates, in the order they are listed in help text.
    pub const ALL: [Aggregate; 5] = [
        Aggregate::Avg,
        Aggregate::Min,
        Aggregate::Max,
        Aggregate::Sum,
        Aggregate::Count,
    ];

    /// Returns the keyword used for this aggregate in `--agg` expressions.
    pub fn as_str(self) -> &'static str {
        match self {
            Aggregate::Avg => "avg",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
            Aggregate::Sum => "sum",
            Aggregate::Count => "count",
        }
    }

    /// Returns `true` if this aggregate reads column values as numbers.
    ///
    /// `count` only counts rows, so any column content is accepted.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Aggregate::Count)
    }

    /// Reduces a list of numbers.
    ///
    /// `sum` of nothing is zero; `avg`, `min` and `max` of nothing have no
    /// value and return `None`.
    pub fn reduce(self, numbers: &[Number]) -> Option<Number> {
        match self {
            Aggregate::Count => Some(Number::from(numbers.len())),
            Aggregate::Sum => Some(sum(numbers)),
            Aggregate::Avg if numbers.is_empty() => None,
            Aggregate::Avg => Some(Number::F64(mean(numbers))),
            Aggregate::Min => extreme(numbers, Ordering::Less),
            Aggregate::Max => extreme(numbers, Ordering::Greater),
        }
    }
}

fn sum(numbers: &[Number]) -> Number {
    numbers
        .iter()
        .fold(Number::I64(0), |acc, n| acc.add(*n))
}

/// Divides after summing when the total is finite, otherwise divides each
/// term first so large values do not overflow to infinity.
fn mean(numbers: &[Number]) -> f64 {
    let n = numbers.len() as f64;
    let total = sum(numbers).to_f64();
    if total.is_finite() {
        total / n
    } else {
        numbers.iter().map(|x| x.to_f64() / n).sum()
    }
}

fn extreme(numbers: &[Number], wanted: Ordering) -> Option<Number> {
    numbers.iter().copied().reduce(|best, n| {
        if n.compare(best) == Some(wanted) {
            n
        } else {
            best
        }
    })
}

impl FromStr for Aggregate {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Aggregate::ALL
            .into_iter()
            .find(|agg| agg.as_str() == s)
            .ok_or_else(|| SeekerError::UnknownAggregate(s.to_string()))
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `--agg` expression: which column, which reduction.
///
/// # Example
///
/// ```
/// use csvsift_seeker::{Aggregate, AggregateSpec, Number};
///
/// let spec: AggregateSpec = "price=sum".parse().unwrap();
/// assert_eq!(spec.aggregate(), Aggregate::Sum);
///
/// let prices = vec!["100".to_string(), "200".to_string(), "300".to_string()];
/// fn price<'a>(p: &'a String, _column: &str) -> Option<&'a str> {
///     Some(p.as_str())
/// }
/// assert_eq!(spec.apply(&prices, price).unwrap(), Number::I64(600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateSpec {
    column: String,
    aggregate: Aggregate,
}

impl AggregateSpec {
    /// Creates a new aggregate spec.
    pub fn new(column: impl Into<String>, aggregate: Aggregate) -> Self {
        AggregateSpec {
            column: column.into(),
            aggregate,
        }
    }

    /// Parses a `column=aggregator` expression.
    ///
    /// Exactly one `=` is allowed. Both sides are trimmed.
    pub fn parse(input: &str) -> Result<Self> {
        let (column, keyword) = input
            .split_once('=')
            .ok_or_else(|| SeekerError::syntax("aggregation", input, "expected column=aggregator"))?;

        if keyword.contains('=') {
            return Err(SeekerError::syntax(
                "aggregation",
                input,
                "expected exactly one '='",
            ));
        }

        let column = column.trim();
        if column.is_empty() {
            return Err(SeekerError::syntax("aggregation", input, "column name is empty"));
        }

        let aggregate = keyword.trim().parse()?;
        Ok(AggregateSpec::new(column, aggregate))
    }

    /// The column to reduce.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The reduction to apply.
    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    /// Checks that the column is one of `columns`.
    pub fn validate<S: AsRef<str>>(&self, columns: &[S]) -> Result<()> {
        if columns.iter().any(|c| c.as_ref() == self.column) {
            Ok(())
        } else {
            Err(SeekerError::missing_field(&self.column))
        }
    }

    /// Reduces the column across `items`.
    ///
    /// Numeric aggregates fail on the first value that is not a number.
    /// `avg`, `min` and `max` fail on an empty collection; `sum` returns 0.
    pub fn apply<T, F>(&self, items: &[T], accessor: F) -> Result<Number>
    where
        for<'a> F: Fn(&'a T, &str) -> Option<&'a str>,
    {
        if !self.aggregate.is_numeric() {
            return Ok(Number::from(items.len()));
        }

        let mut numbers = Vec::with_capacity(items.len());
        for item in items {
            let raw = accessor(item, &self.column)
                .ok_or_else(|| SeekerError::missing_field(&self.column))?;
            let number = Number::parse(raw).ok_or_else(|| SeekerError::NonNumeric {
                column: self.column.clone(),
                value: raw.to_string(),
            })?;
            numbers.push(number);
        }

        self.aggregate
            .reduce(&numbers)
            .ok_or_else(|| SeekerError::EmptyInput {
                aggregate: self.aggregate,
                column: self.column.clone(),
            })
    }
}

impl FromStr for AggregateSpec {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        AggregateSpec::parse(s)
    }
}

impl fmt::Display for AggregateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.aggregate)
    }
}
