//! # csvsift-render - Terminal tables
//!
//! `csvsift-render` lays out rows of text as a bordered grid. It is the
//! table backend of the `csvsift` CLI, and has no knowledge of CSV.
//!
//! ## Core Concepts
//!
//! - [`Table`]: columns plus a border style; renders any number of row sets
//! - [`Column`] / [`Col`]: header title and alignment for one column
//! - [`BorderStyle`]: ASCII, box-drawing or borderless layout
//!
//! ## Quick Start
//!
//! ```rust
//! use csvsift_render::{BorderStyle, Col, Table};
//!
//! let table = Table::new([Col::left("name"), Col::right("price")])
//!     .border(BorderStyle::None);
//!
//! let output = table.render(&[vec!["phone1", "100"], vec!["phone2", "200"]]);
//! assert_eq!(output, "name    price\n------  -----\nphone1    100\nphone2    200");
//! ```

pub mod tabular;

pub use tabular::{Align, BorderStyle, Col, Column, Table};
