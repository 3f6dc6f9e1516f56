//! Core types for table layout configuration.
//!
//! A table is a list of [`Column`]s, each with a header and an alignment.
//! Widths are not configured: every column is as wide as its widest cell.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// Configuration for a single column in a table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header title.
    pub header: String,
    /// Alignment for data cells.
    pub align: Align,
    /// Alignment for the header cell.
    pub header_align: Align,
    /// Representation for empty cells.
    pub null_repr: String,
}

impl Column {
    /// Create a left-aligned column with the given header.
    pub fn new(header: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Set data cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for right alignment.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Shorthand for center alignment.
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Set header cell alignment.
    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }

    /// Set the text shown for empty cells.
    pub fn null_repr(mut self, null_repr: impl Into<String>) -> Self {
        self.null_repr = null_repr.into();
        self
    }
}

/// Shorthand constructors for columns.
///
/// ```rust
/// use csvsift_render::tabular::{Align, Col};
///
/// let col = Col::right("price");
/// assert_eq!(col.align, Align::Right);
/// ```
pub struct Col;

impl Col {
    /// Left-aligned column.
    pub fn left(header: impl Into<String>) -> Column {
        Column::new(header)
    }

    /// Right-aligned column.
    pub fn right(header: impl Into<String>) -> Column {
        Column::new(header).right()
    }

    /// Centered column.
    pub fn center(header: impl Into<String>) -> Column {
        Column::new(header).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_builder() {
        let col = Column::new("price").right().null_repr("-");
        assert_eq!(col.header, "price");
        assert_eq!(col.align, Align::Right);
        assert_eq!(col.header_align, Align::Left);
        assert_eq!(col.null_repr, "-");
    }

    #[test]
    fn align_serde() {
        let json = serde_json::to_string(&Align::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let parsed: Align = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(parsed, Align::Center);
    }
}
