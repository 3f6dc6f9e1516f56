//! Unicode-aware column formatting for terminal tables.
//!
//! Widths are measured in terminal columns: CJK characters count as two and
//! ANSI escape codes are not counted.
//!
//! ```rust
//! use csvsift_render::tabular::{display_width, pad_left, BorderStyle, Col, Table};
//!
//! let table = Table::new([Col::left("brand"), Col::right("count")])
//!     .border(BorderStyle::Light);
//! let output = table.render(&[vec!["brand1", "2"]]);
//! assert!(output.contains("│ brand1 │     2 │"));
//!
//! assert_eq!(pad_left("2", 3), "  2");
//! assert_eq!(display_width("日本"), 4);
//! ```

mod decorator;
mod types;
mod util;

pub use decorator::{BorderStyle, Table};
pub use types::{Align, Col, Column};
pub use util::{block_width, display_width, pad_aligned, pad_center, pad_left, pad_right};
