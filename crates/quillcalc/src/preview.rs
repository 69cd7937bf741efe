//! Grid-wide formula preview
//!
//! A raw table snapshot can contain formula cells (text starting with
//! `=`) next to the data they aggregate. The preview walks a scanned
//! grid, evaluates every formula cell in place against that same
//! snapshot, and reports the outcomes plus summary counts — the shape the
//! editor wants for refreshing a whole table after an edit.
//!
//! Formula text never scans as numeric, so formula cells are `Text` cells
//! to the scanner and contribute nothing to the ranges they aggregate.

use quillcalc_core::{CellAddress, Grid};
use quillcalc_formula::{evaluate, EvalError, EvaluationResult};

/// Outcome of evaluating one formula cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellPreview {
    /// Where the formula cell sits
    pub address: CellAddress,
    /// The formula text as it appeared in the cell
    pub formula: String,
    /// Evaluation outcome; errors are values here, never panics
    pub outcome: Result<EvaluationResult, EvalError>,
}

/// Summary counts from a preview run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewStats {
    /// Number of formula cells found
    pub formula_count: usize,
    /// Number that evaluated to a value
    pub evaluated: usize,
    /// Number that returned an error code
    pub errors: usize,
}

/// A full preview: per-cell outcomes plus stats
#[derive(Debug, Clone, PartialEq)]
pub struct GridPreview {
    /// One entry per formula cell, row-major
    pub cells: Vec<CellPreview>,
    /// Summary counts
    pub stats: PreviewStats,
}

/// Evaluate every formula cell of a grid in place.
///
/// # Examples
/// ```
/// use quillcalc::preview::preview_grid;
/// use quillcalc_core::Grid;
///
/// let grid = Grid::scan(&[vec!["10"], vec!["20"], vec!["=SUM(ABOVE)"]]);
/// let preview = preview_grid(&grid);
///
/// assert_eq!(preview.stats.formula_count, 1);
/// assert_eq!(preview.cells[0].outcome.as_ref().unwrap().value, 30.0);
/// ```
pub fn preview_grid(grid: &Grid) -> GridPreview {
    let mut cells = Vec::new();
    let mut stats = PreviewStats::default();

    for cell in grid.iter() {
        let raw = cell.raw.trim();
        if !raw.starts_with('=') {
            continue;
        }

        stats.formula_count += 1;
        let outcome = evaluate(raw, cell.address, grid);
        match &outcome {
            Ok(_) => stats.evaluated += 1,
            Err(_) => stats.errors += 1,
        }

        cells.push(CellPreview {
            address: cell.address,
            formula: raw.to_string(),
            outcome,
        });
    }

    GridPreview { cells, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preview_mixed_grid() {
        let grid = Grid::scan(&[
            vec!["10", "20", "=SUM(LEFT)"],
            vec!["30", "40", "=SUM(LEFT)"],
            vec!["=SUM(ABOVE)", "=BOGUS(A1)", "label"],
        ]);

        let preview = preview_grid(&grid);
        assert_eq!(preview.stats.formula_count, 4);
        assert_eq!(preview.stats.evaluated, 3);
        assert_eq!(preview.stats.errors, 1);

        // Row-major: C1, C2, A3, B3
        assert_eq!(preview.cells[0].outcome.as_ref().unwrap().value, 30.0);
        assert_eq!(preview.cells[1].outcome.as_ref().unwrap().value, 70.0);
        assert_eq!(preview.cells[2].outcome.as_ref().unwrap().value, 40.0);
        assert_eq!(
            preview.cells[3].outcome,
            Err(EvalError::UnknownFunction("BOGUS".into()))
        );
    }

    #[test]
    fn test_preview_without_formulas() {
        let grid = Grid::scan(&[vec!["1", "2"]]);
        let preview = preview_grid(&grid);
        assert!(preview.cells.is_empty());
        assert_eq!(preview.stats, PreviewStats::default());
    }
}
