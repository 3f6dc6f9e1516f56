//! Query builder and executor.
//!
//! The [`Query`] struct collects filter conditions and runs them against a
//! collection. Conditions combine with AND: an item is kept only when every
//! condition matches, and an empty query keeps everything.

use tracing::trace;

use crate::condition::Condition;
use crate::error::{Result, SeekerError};
use crate::op::Op;

/// A conjunction of filter conditions.
///
/// # Example
///
/// ```
/// use csvsift_seeker::{Op, Query};
///
/// let query = Query::new()
///     .and_gte("price", "149")
///     .and("price", Op::Lte, "299")
///     .build();
/// assert_eq!(query.conditions().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    conditions: Vec<Condition>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Clause builders
    // ========================================================================

    /// Adds a condition.
    pub fn and(mut self, column: &str, op: Op, value: impl Into<String>) -> Self {
        self.conditions.push(Condition::new(column, op, value));
        self
    }

    /// Adds an already-parsed condition.
    pub fn and_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Parses a `column<op>value` expression and adds it.
    pub fn and_parse(self, expression: &str) -> Result<Self> {
        Ok(self.and_condition(Condition::parse(expression)?))
    }

    /// Adds an equality condition.
    pub fn and_eq(self, column: &str, value: impl Into<String>) -> Self {
        self.and(column, Op::Eq, value)
    }

    /// Adds a not-equal condition.
    pub fn and_ne(self, column: &str, value: impl Into<String>) -> Self {
        self.and(column, Op::Ne, value)
    }

    /// Adds a greater-than condition.
    pub fn and_gt(self, column: &str, value: impl Into<String>) -> Self {
        self.and(column, Op::Gt, value)
    }

    /// Adds a greater-than-or-equal condition.
    pub fn and_gte(self, column: &str, value: impl Into<String>) -> Self {
        self.and(column, Op::Gte, value)
    }

    /// Adds a less-than condition.
    pub fn and_lt(self, column: &str, value: impl Into<String>) -> Self {
        self.and(column, Op::Lt, value)
    }

    /// Adds a less-than-or-equal condition.
    pub fn and_lte(self, column: &str, value: impl Into<String>) -> Self {
        self.and(column, Op::Lte, value)
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the conditions in the order they were added.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns `true` if this query has no conditions (matches everything).
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Checks that every condition names one of `columns`.
    ///
    /// Run this against the header before filtering so a typo in a column
    /// name is reported even when there are no rows.
    pub fn validate<S: AsRef<str>>(&self, columns: &[S]) -> Result<()> {
        for condition in &self.conditions {
            if !columns.iter().any(|c| c.as_ref() == condition.column()) {
                return Err(SeekerError::missing_field(condition.column()));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this query.
    ///
    /// Stops at the first failing condition. A condition whose column the
    /// accessor cannot find is an error, not a mismatch.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> Result<bool>
    where
        for<'a> F: Fn(&'a T, &str) -> Option<&'a str>,
    {
        for condition in &self.conditions {
            let field = accessor(item, condition.column())
                .ok_or_else(|| SeekerError::missing_field(condition.column()))?;
            if !condition.matches(field) {
                trace!(condition = %condition, field, "condition rejected item");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Filters a slice, returning references to matching items in order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<Vec<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Option<&'b str>,
    {
        let mut results = Vec::new();
        for item in items {
            if self.matches(item, &accessor)? {
                results.push(item);
            }
        }
        Ok(results)
    }

    /// Filters and clones matching items.
    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Result<Vec<T>>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Option<&'a str>,
    {
        Ok(self.filter(items, accessor)?.into_iter().cloned().collect())
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> Result<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Option<&'a str>,
    {
        let mut count = 0;
        for item in items {
            if self.matches(item, &accessor)? {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl FromIterator<Condition> for Query {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Query {
            conditions: iter.into_iter().collect(),
        }
    }
}
