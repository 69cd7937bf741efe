//! Formula evaluation
//!
//! Ties the pipeline together: parse the formula, resolve its argument
//! against the grid, apply the aggregate, and format a trace for the UI.
//!
//! Evaluation is a pure function of `(formula, current cell, grid)`. There
//! is no cached or incremental state: the source table can be edited
//! arbitrarily between calls, and consumers re-scan a fresh snapshot
//! whenever it changes.

use quillcalc_core::{CellAddress, Grid};

use crate::error::EvalResult;
use crate::parser::parse_formula;
use crate::resolver::resolve;

/// The outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// The computed value, rounded for display
    pub value: f64,
    /// The resolved input values, row-major
    pub values: Vec<f64>,
    /// Human-readable trace, e.g. `SUM(ABOVE) = 12 [Values: 5, 7]`
    pub trace: String,
}

/// Evaluate a formula at a cell against a scanned grid.
///
/// An empty resolved value list yields `0`, not an error: referencing an
/// edge-of-table direction or a blank range is a normal, transient state
/// while the user is still composing the formula.
///
/// # Examples
/// ```
/// use quillcalc_core::{CellAddress, Grid};
/// use quillcalc_formula::evaluate;
///
/// let grid = Grid::scan(&[vec!["10", "20"], vec!["30", "40"]]);
/// let result = evaluate("=SUM(A1:B2)", CellAddress::new(1, 1), &grid).unwrap();
/// assert_eq!(result.value, 100.0);
/// ```
pub fn evaluate(formula: &str, current: CellAddress, grid: &Grid) -> EvalResult<EvaluationResult> {
    let invocation = parse_formula(formula)?;
    let values = resolve(&invocation.argument, current, grid);

    let value = if values.is_empty() {
        0.0
    } else {
        round_for_display(invocation.function.apply(&values))
    };

    let rendered: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    let trace = format!(
        "{}({}) = {} [Values: {}]",
        invocation.function.name(),
        invocation.argument_text,
        format_number(value),
        rendered.join(", ")
    );

    Ok(EvaluationResult {
        value,
        values,
        trace,
    })
}

/// Round to 2 decimal places, but leave exact integers untouched.
///
/// Avoids spurious float noise ("33.333333333333336") without turning 100
/// into "100.00".
fn round_for_display(value: f64) -> f64 {
    if value.fract() == 0.0 {
        value
    } else {
        (value * 100.0).round() / 100.0
    }
}

/// Format a value the way the trace shows it: integers without a decimal
/// point, everything else as-is.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
