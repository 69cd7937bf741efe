//! Range resolution
//!
//! Turns a classified formula argument into the ordered list of numeric
//! values it covers on a given grid. Only cells that scanned as numbers
//! contribute; empty and text cells are skipped. An empty result is a
//! normal outcome (a direction at the grid edge, a blank range), never an
//! error — the evaluator maps it to 0.

use quillcalc_core::{CellAddress, CellRange, Grid};

use crate::parser::{Direction, FormulaArg};

/// Resolve an argument to its numeric values, row-major ascending.
pub fn resolve(arg: &FormulaArg, current: CellAddress, grid: &Grid) -> Vec<f64> {
    match arg {
        FormulaArg::Direction(direction) => resolve_direction(*direction, current, grid),
        FormulaArg::Range(range) => resolve_range(range, grid),
        FormulaArg::Cell(addr) => grid
            .cell_at(*addr)
            .and_then(|cell| cell.number)
            .into_iter()
            .collect(),
    }
}

/// Walk the row or column strictly between the grid edge and the current
/// cell, exclusive of the current cell itself.
fn resolve_direction(direction: Direction, current: CellAddress, grid: &Grid) -> Vec<f64> {
    let collect_rows = |rows: std::ops::Range<u32>| -> Vec<f64> {
        rows.filter_map(|row| grid.cell(row, current.col))
            .filter_map(|cell| cell.number)
            .collect()
    };
    let collect_cols = |cols: std::ops::Range<u32>| -> Vec<f64> {
        cols.filter_map(|col| grid.cell(current.row, col))
            .filter_map(|cell| cell.number)
            .collect()
    };

    match direction {
        Direction::Above => collect_rows(0..current.row.min(grid.row_count())),
        Direction::Below => collect_rows(current.row.saturating_add(1)..grid.row_count()),
        Direction::Left => collect_cols(0..current.col.min(grid.col_count())),
        Direction::Right => collect_cols(current.col.saturating_add(1)..grid.col_count()),
    }
}

/// Collect numeric cells inside a normalized range, row-major.
///
/// Iteration is clamped to the grid so an oversized range costs no more
/// than the grid itself.
fn resolve_range(range: &CellRange, grid: &Grid) -> Vec<f64> {
    if grid.is_empty() || range.start.row >= grid.row_count() || range.start.col >= grid.col_count()
    {
        return Vec::new();
    }

    let end_row = range.end.row.min(grid.row_count() - 1);
    let end_col = range.end.col.min(grid.col_count() - 1);

    let mut values = Vec::new();
    for row in range.start.row..=end_row {
        for col in range.start.col..=end_col {
            if let Some(number) = grid.cell(row, col).and_then(|cell| cell.number) {
                values.push(number);
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_grid() -> Grid {
        // 3x3: numbers down column A, mixed elsewhere
        Grid::scan(&[
            vec!["5", "x", "1"],
            vec!["7", "", "2"],
            vec!["9", "30", "3"],
        ])
    }

    #[test]
    fn test_direction_above() {
        let grid = sample_grid();
        let arg = FormulaArg::Direction(Direction::Above);

        assert_eq!(resolve(&arg, CellAddress::new(2, 0), &grid), vec![5.0, 7.0]);
        // Text and empty cells are skipped.
        assert_eq!(resolve(&arg, CellAddress::new(2, 1), &grid), Vec::<f64>::new());
        // At the top edge there is nothing above.
        assert_eq!(resolve(&arg, CellAddress::new(0, 0), &grid), Vec::<f64>::new());
    }

    #[test]
    fn test_direction_below() {
        let grid = sample_grid();
        let arg = FormulaArg::Direction(Direction::Below);

        assert_eq!(resolve(&arg, CellAddress::new(0, 2), &grid), vec![2.0, 3.0]);
        assert_eq!(resolve(&arg, CellAddress::new(2, 2), &grid), Vec::<f64>::new());
    }

    #[test]
    fn test_direction_left_right() {
        let grid = sample_grid();

        assert_eq!(
            resolve(&FormulaArg::Direction(Direction::Left), CellAddress::new(2, 2), &grid),
            vec![9.0, 30.0]
        );
        assert_eq!(
            resolve(&FormulaArg::Direction(Direction::Right), CellAddress::new(0, 0), &grid),
            vec![1.0]
        );
        assert_eq!(
            resolve(&FormulaArg::Direction(Direction::Left), CellAddress::new(0, 0), &grid),
            Vec::<f64>::new()
        );
    }

    #[test]
    fn test_direction_with_current_off_grid() {
        let grid = sample_grid();
        // A current cell below the grid sees the whole column above it.
        assert_eq!(
            resolve(&FormulaArg::Direction(Direction::Above), CellAddress::new(10, 0), &grid),
            vec![5.0, 7.0, 9.0]
        );
        assert_eq!(
            resolve(&FormulaArg::Direction(Direction::Below), CellAddress::new(10, 0), &grid),
            Vec::<f64>::new()
        );
    }

    #[test]
    fn test_range_row_major() {
        let grid = sample_grid();
        let arg = FormulaArg::Range(CellRange::parse("A1:C3").unwrap());

        assert_eq!(
            resolve(&arg, CellAddress::new(0, 0), &grid),
            vec![5.0, 1.0, 7.0, 2.0, 9.0, 30.0, 3.0]
        );
    }

    #[test]
    fn test_range_clamped_to_grid() {
        let grid = sample_grid();
        let arg = FormulaArg::Range(CellRange::parse("A1:Z100").unwrap());
        assert_eq!(resolve(&arg, CellAddress::new(0, 0), &grid).len(), 7);

        let off_grid = FormulaArg::Range(CellRange::parse("J10:K20").unwrap());
        assert_eq!(resolve(&off_grid, CellAddress::new(0, 0), &grid), Vec::<f64>::new());
    }

    #[test]
    fn test_single_cell() {
        let grid = sample_grid();

        assert_eq!(
            resolve(&FormulaArg::Cell(CellAddress::new(0, 0)), CellAddress::new(2, 2), &grid),
            vec![5.0]
        );
        // Text cell and off-grid cell both contribute nothing.
        assert_eq!(
            resolve(&FormulaArg::Cell(CellAddress::new(0, 1)), CellAddress::new(2, 2), &grid),
            Vec::<f64>::new()
        );
        assert_eq!(
            resolve(&FormulaArg::Cell(CellAddress::new(99, 99)), CellAddress::new(2, 2), &grid),
            Vec::<f64>::new()
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::scan(&Vec::<Vec<String>>::new());
        assert_eq!(
            resolve(&FormulaArg::Direction(Direction::Above), CellAddress::new(0, 0), &grid),
            Vec::<f64>::new()
        );
    }
}
