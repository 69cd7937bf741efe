//! # quillcalc-core
//!
//! Core grid data structures for the quillcalc table formula engine.
//!
//! This crate provides the fundamental types used throughout quillcalc:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing and ranges
//! - [`parse_numeric`] - numeric classification of raw cell text
//! - [`Grid`] and [`Cell`] - the immutable, typed snapshot of a table
//!
//! ## Example
//!
//! ```rust
//! use quillcalc_core::{CellKind, Grid};
//!
//! let grid = Grid::scan(&[vec!["10", "20"], vec!["$1,200.50", "total"]]);
//!
//! assert_eq!(grid.by_reference("A1").unwrap().number, Some(10.0));
//! assert_eq!(grid.by_reference("A2").unwrap().number, Some(1200.50));
//! assert_eq!(grid.by_reference("B2").unwrap().kind, CellKind::Text);
//! ```

pub mod address;
pub mod error;
pub mod grid;
pub mod numeric;
pub mod range;

// Re-exports for convenience
pub use address::{column_index, column_label, CellAddress};
pub use error::{Error, Result};
pub use grid::{Cell, CellKind, Grid};
pub use numeric::parse_numeric;
pub use range::{CellRange, CellRangeIterator};
