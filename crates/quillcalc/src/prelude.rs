//! Prelude module - common imports for quillcalc users
//!
//! ```rust
//! use quillcalc::prelude::*;
//! ```

pub use crate::{
    evaluate,
    fill_formulas,
    parse_formula,
    parse_numeric,
    preview_grid,
    shift_references,
    // Formula types
    AggregateFunction,
    Cell,
    // Addressing
    CellAddress,
    CellKind,
    // Preview types
    CellPreview,
    CellRange,
    Direction,
    // Error types
    Error,
    EvalError,
    EvalResult,
    EvaluationResult,
    FormulaArg,
    FormulaInvocation,
    // Main types
    Grid,
    GridPreview,
    PreviewStats,
    Result,
};
