//! Relative reference shifting for fill/drag-copy
//!
//! When the user drags a formula cell across the table, every reference in
//! the copied formula moves by the drag offset: `SUM(A1:B2)` filled one
//! row down becomes `SUM(A2:B3)`. This rewrites the formula *text*, not an
//! AST — a left-to-right scan over reference-shaped tokens that leaves the
//! function name and structural characters untouched.

use once_cell::sync::Lazy;
use quillcalc_core::CellAddress;
use regex::Regex;

/// Reference-shaped tokens: a letter run followed by a digit run.
///
/// The function names (SUM, AVERAGE, ...) and direction keywords contain
/// no digits, so they never match.
static CELL_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z]+[0-9]+\b").unwrap());

/// Shift every cell reference in a formula by the given deltas.
///
/// A reference whose shifted row or column would go negative is left
/// verbatim — clamping silently beats producing a reference that points
/// off the table. Rewritten references come out in canonical uppercase;
/// all other text is preserved as written.
///
/// # Examples
/// ```
/// use quillcalc_formula::shift_references;
///
/// assert_eq!(shift_references("SUM(A1:B2)", 1, 0), "SUM(A2:B3)");
/// assert_eq!(shift_references("SUM(A1:B2)", -5, 0), "SUM(A1:B2)");
/// assert_eq!(shift_references("=AVERAGE(b2)", 0, 2), "=AVERAGE(D2)");
/// ```
pub fn shift_references(formula: &str, row_delta: i64, col_delta: i64) -> String {
    CELL_REF
        .replace_all(formula, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            shift_token(token, row_delta, col_delta).unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}

fn shift_token(token: &str, row_delta: i64, col_delta: i64) -> Option<String> {
    let addr = CellAddress::parse_opt(token)?;

    let row = u32::try_from(addr.row as i64 + row_delta);
    let col = u32::try_from(addr.col as i64 + col_delta);
    match (row, col) {
        (Ok(row), Ok(col)) => Some(CellAddress::new(row, col).to_a1_string()),
        _ => {
            log::debug!(
                "leaving reference {} in place: shift by ({}, {}) would go off-table",
                token,
                row_delta,
                col_delta
            );
            None
        }
    }
}

/// Produce the shifted formula for each target of a fill operation.
///
/// The offset for a target is its distance from the anchor cell (the cell
/// the user started dragging from), so filling `=SUM(ABOVE)` straight down
/// leaves it unchanged while `=SUM(A1)` walks with the drag.
pub fn fill_formulas(
    formula: &str,
    anchor: CellAddress,
    targets: &[CellAddress],
) -> Vec<(CellAddress, String)> {
    targets
        .iter()
        .map(|target| {
            let row_delta = target.row as i64 - anchor.row as i64;
            let col_delta = target.col as i64 - anchor.col as i64;
            (*target, shift_references(formula, row_delta, col_delta))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shift_down() {
        assert_eq!(shift_references("SUM(A1:B2)", 1, 0), "SUM(A2:B3)");
        assert_eq!(shift_references("=SUM(A1:B2)", 2, 1), "=SUM(B3:C4)");
    }

    #[test]
    fn test_shift_clamps_at_origin() {
        assert_eq!(shift_references("SUM(A1:B2)", -5, 0), "SUM(A1:B2)");
        assert_eq!(shift_references("SUM(A1)", 0, -1), "SUM(A1)");
        // Only the reference that would go negative stays put.
        assert_eq!(shift_references("SUM(A1:B5)", -2, 0), "SUM(A1:B3)");
    }

    #[test]
    fn test_function_name_untouched() {
        assert_eq!(shift_references("SUM(ABOVE)", 3, 3), "SUM(ABOVE)");
        assert_eq!(
            shift_references("average(c3) + MAX(D4)", 1, 1),
            "average(D4) + MAX(E5)"
        );
    }

    #[test]
    fn test_lowercase_references_canonicalized() {
        assert_eq!(shift_references("sum(a1:b2)", 1, 0), "sum(A2:B3)");
    }

    #[test]
    fn test_column_letters_advance() {
        assert_eq!(shift_references("SUM(Z1)", 0, 1), "SUM(AA1)");
        assert_eq!(shift_references("SUM(AA1)", 0, -1), "SUM(Z1)");
    }

    #[test]
    fn test_non_reference_tokens_left_alone() {
        // "A0" is reference-shaped but rows are 1-based, so it never decodes.
        assert_eq!(shift_references("SUM(A0)", 1, 1), "SUM(A0)");
    }

    #[test]
    fn test_fill_down_column() {
        let anchor = CellAddress::new(2, 0);
        let targets = [CellAddress::new(3, 0), CellAddress::new(4, 0)];

        let filled = fill_formulas("=SUM(A1:A2)", anchor, &targets);
        assert_eq!(
            filled,
            vec![
                (CellAddress::new(3, 0), "=SUM(A2:A3)".to_string()),
                (CellAddress::new(4, 0), "=SUM(A3:A4)".to_string()),
            ]
        );
    }

    #[test]
    fn test_fill_directional_formula_unchanged() {
        let anchor = CellAddress::new(2, 0);
        let targets = [CellAddress::new(2, 1), CellAddress::new(2, 2)];

        for (_, formula) in fill_formulas("=SUM(ABOVE)", anchor, &targets) {
            assert_eq!(formula, "=SUM(ABOVE)");
        }
    }
}
