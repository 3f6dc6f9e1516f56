//! Seeker - filter conditions and aggregates for CSV rows.
//!
//! Rows are plain text. Seeker parses `--filter` style expressions into
//! [`Condition`]s, runs them as a [`Query`], and reduces a column with an
//! [`AggregateSpec`]. It supports:
//!
//! - Six comparison operators: `>`, `<`, `>=`, `<=`, `=`, `!=`
//! - Numeric comparison whenever both sides parse as numbers, lexicographic
//!   comparison otherwise
//! - AND-only conjunction of conditions (empty query matches everything)
//! - `avg`, `min`, `max`, `sum` and `count` reductions
//!
//! # Quick Start
//!
//! ```rust
//! use csvsift_seeker::{AggregateSpec, Number, Query, Seekable};
//! use std::collections::HashMap;
//!
//! type Row = HashMap<String, String>;
//!
//! fn row(name: &str, price: &str) -> Row {
//!     Row::from([
//!         ("name".to_string(), name.to_string()),
//!         ("price".to_string(), price.to_string()),
//!     ])
//! }
//!
//! let rows = vec![row("iphone 14", "999"), row("galaxy s23", "899"), row("pixel", "599")];
//!
//! let query = Query::new()
//!     .and_parse("price>=600")?
//!     .build();
//! let kept = query.filter_cloned(&rows, Row::accessor)?;
//! assert_eq!(kept.len(), 2);
//!
//! let total: AggregateSpec = "price=sum".parse()?;
//! assert_eq!(total.apply(&kept, Row::accessor)?, Number::I64(1898));
//! # Ok::<(), csvsift_seeker::SeekerError>(())
//! ```
//!
//! # Comparison Semantics
//!
//! ```text
//! both sides parse as numbers  → compare numerically   ("10" > "9")
//! otherwise                    → compare as text       ("b" > "a")
//! ```
//!
//! Numbers are integers where possible and finite floats otherwise; `nan`
//! and `inf` are text.

mod aggregate;
mod condition;
mod error;
mod op;
mod query;
mod traits;
mod value;

// Re-export public API
pub use aggregate::{Aggregate, AggregateSpec};
pub use condition::Condition;
pub use error::{Result, SeekerError};
pub use op::Op;
pub use query::Query;
pub use traits::Seekable;
pub use value::{Number, Value};
