//! Runtime value types for field comparison.
//!
//! CSV fields are plain text. The [`Value`] enum is the typed view of one
//! field: a [`Number`] when the text parses as one, the raw text otherwise.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Typed view of a raw field, borrowed from the source text.
///
/// # Example
///
/// ```
/// use csvsift_seeker::{Number, Value};
///
/// assert_eq!(Value::classify("999"), Value::Number(Number::I64(999)));
/// assert_eq!(Value::classify(" 4.5 "), Value::Number(Number::F64(4.5)));
/// assert_eq!(Value::classify("iphone 14"), Value::String("iphone 14"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text that does not parse as a number.
    String(&'a str),
    /// Numeric value.
    Number(Number),
}

impl<'a> Value<'a> {
    /// Classifies raw field text as a number or a string.
    pub fn classify(raw: &'a str) -> Self {
        match Number::parse(raw) {
            Some(n) => Value::Number(n),
            None => Value::String(raw),
        }
    }
}

/// Numeric value parsed from field text.
///
/// Integers stay integers so sums and extrema print exactly (`600`, not
/// `600.0`). Anything with a fraction or exponent is an `F64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// 64-bit floating point. Always finite.
    F64(f64),
}

impl Number {
    /// Parses trimmed text as an integer, then as a finite float.
    ///
    /// `nan`, `inf` and friends are rejected so they compare as text.
    pub fn parse(raw: &str) -> Option<Number> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(n) = text.parse::<i64>() {
            return Some(Number::I64(n));
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Some(Number::F64(f)),
            _ => None,
        }
    }

    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Adds two numbers, staying integral until overflow or a float shows up.
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => match a.checked_add(b) {
                Some(sum) => Number::I64(sum),
                None => Number::F64(a as f64 + b as f64),
            },
            _ => Number::F64(self.to_f64() + other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::I64(n) => serializer.serialize_i64(*n),
            Number::F64(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        i64::try_from(n)
            .map(Number::I64)
            .unwrap_or(Number::F64(n as f64))
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_numbers_and_text() {
        assert_eq!(Value::classify("10"), Value::Number(Number::I64(10)));
        assert_eq!(Value::classify("-3"), Value::Number(Number::I64(-3)));
        assert_eq!(Value::classify("4.0"), Value::Number(Number::F64(4.0)));
        assert_eq!(Value::classify("1e3"), Value::Number(Number::F64(1000.0)));
        assert_eq!(Value::classify("brand1"), Value::String("brand1"));
        assert_eq!(Value::classify(""), Value::String(""));
    }

    #[test]
    fn classify_rejects_non_finite() {
        for raw in ["nan", "inf", "-infinity"] {
            assert_eq!(Value::classify(raw), Value::String(raw));
        }
    }

    #[test]
    fn number_comparisons_same_type() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(10).compare(Number::I64(5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::F64(5.0).compare(Number::F64(10.0)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::I64(10).compare(Number::F64(5.5)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn number_add_stays_integral() {
        assert_eq!(Number::I64(2).add(Number::I64(3)), Number::I64(5));
        assert_eq!(Number::I64(2).add(Number::F64(0.5)), Number::F64(2.5));
        assert_eq!(
            Number::I64(i64::MAX).add(Number::I64(1)),
            Number::F64(i64::MAX as f64 + 1.0)
        );
    }

    #[test]
    fn number_display() {
        assert_eq!(Number::I64(600).to_string(), "600");
        assert_eq!(Number::F64(300.0).to_string(), "300");
        assert_eq!(Number::F64(4.8).to_string(), "4.8");
    }
}
