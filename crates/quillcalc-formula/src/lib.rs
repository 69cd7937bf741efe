//! # quillcalc-formula
//!
//! Formula parser and evaluator for quillcalc document tables.
//!
//! This crate provides:
//! - Formula parsing (`=SUM(ABOVE)` → [`FormulaInvocation`])
//! - Range resolution (argument → numeric values on a [`Grid`])
//! - Evaluation with a human-readable trace
//! - Reference shifting for fill/drag-copy
//!
//! ## Example
//!
//! ```rust
//! use quillcalc_core::{CellAddress, Grid};
//! use quillcalc_formula::evaluate;
//!
//! let grid = Grid::scan(&[vec!["5"], vec!["7"], vec!["9"]]);
//! let result = evaluate("=SUM(ABOVE)", CellAddress::new(2, 0), &grid).unwrap();
//! assert_eq!(result.value, 12.0);
//! ```
//!
//! [`Grid`]: quillcalc_core::Grid

pub mod error;
pub mod evaluator;
pub mod parser;
pub mod resolver;
pub mod shift;

pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, EvaluationResult};
pub use parser::{parse_formula, AggregateFunction, Direction, FormulaArg, FormulaInvocation};
pub use resolver::resolve;
pub use shift::{fill_formulas, shift_references};
