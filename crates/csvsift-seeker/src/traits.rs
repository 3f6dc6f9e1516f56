//! Field access for queryable items.
//!
//! This module provides the [`Seekable`] trait, the seam between the query
//! engine and whatever holds the data (CSV rows in this workspace).

/// Trait for types that can be queried by column name.
///
/// # Example
///
/// ```
/// use csvsift_seeker::{Query, Seekable};
///
/// struct Product {
///     name: String,
///     price: String,
/// }
///
/// impl Seekable for Product {
///     fn seeker_field(&self, column: &str) -> Option<&str> {
///         match column {
///             "name" => Some(self.name.as_str()),
///             "price" => Some(self.price.as_str()),
///             _ => None,
///         }
///     }
/// }
///
/// let products = vec![
///     Product { name: "iphone 14".into(), price: "999".into() },
///     Product { name: "galaxy s23".into(), price: "899".into() },
/// ];
///
/// let query = Query::new().and_parse("price>900").unwrap().build();
/// let results = query.filter(&products, Product::accessor).unwrap();
/// assert_eq!(results.len(), 1);
/// ```
pub trait Seekable {
    /// Returns the raw text of a column, or `None` if the item has no such
    /// column.
    fn seeker_field(&self, column: &str) -> Option<&str>;

    /// Returns a static accessor function suitable for use with
    /// [`Query::filter`](crate::Query::filter).
    fn accessor<'a>(item: &'a Self, column: &str) -> Option<&'a str>
    where
        Self: Sized,
    {
        item.seeker_field(column)
    }
}

impl Seekable for std::collections::HashMap<String, String> {
    fn seeker_field(&self, column: &str) -> Option<&str> {
        self.get(column).map(String::as_str)
    }
}
