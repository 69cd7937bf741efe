//! # quillcalc
//!
//! Embedded spreadsheet formula engine for document tables.
//!
//! Quillcalc is the calculation core behind a rich-text editor's tables:
//! it scans a snapshot of a table's cell text into a typed [`Grid`],
//! resolves cell/range/directional references against it, and evaluates a
//! small aggregate-function language (`=SUM(ABOVE)`, `=AVERAGE(A1:B3)`).
//! The editor owns rendering, selection, and the document itself; this
//! crate only ever sees plain `string` grids and gives back plain values.
//!
//! ## Example
//!
//! ```rust
//! use quillcalc::prelude::*;
//!
//! // A snapshot of the table's text, as the editor hands it over.
//! let grid = Grid::scan(&[
//!     vec!["Widgets", "$1,200.50"],
//!     vec!["Gadgets", "$800.00"],
//! ]);
//!
//! // The user types a formula in the cell below column B.
//! let result = evaluate("=SUM(ABOVE)", CellAddress::new(2, 1), &grid).unwrap();
//! assert_eq!(result.value, 2000.5);
//! ```
//!
//! Every operation is a pure function over an immutable snapshot: grids
//! are rebuilt from the table text whenever it changes, so there is no
//! cache to invalidate and concurrent evaluations need no locking.

pub mod prelude;
pub mod preview;

// Re-export core types
pub use quillcalc_core::{
    column_index,
    column_label,
    parse_numeric,
    Cell,
    // Addressing
    CellAddress,
    // Cell types
    CellKind,
    CellRange,
    // Error types
    Error,
    // Main types
    Grid,
    Result,
};

// Re-export formula types
pub use quillcalc_formula::{
    evaluate, fill_formulas, parse_formula, shift_references, AggregateFunction, Direction,
    EvalError, EvalResult, EvaluationResult, FormulaArg, FormulaInvocation,
};

pub use preview::{preview_grid, CellPreview, GridPreview, PreviewStats};
