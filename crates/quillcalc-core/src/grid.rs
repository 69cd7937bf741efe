//! The scanned grid: an immutable, typed snapshot of a table's text

use ahash::AHashMap;

use crate::address::{column_label, CellAddress};
use crate::numeric::parse_numeric;

/// Classification of a scanned cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Trimmed text is empty
    Empty,
    /// Text parses as a number
    Number,
    /// Anything else (including formula text, which evaluates elsewhere)
    Text,
}

/// A single scanned cell
///
/// Produced once by [`Grid::scan`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Canonical A1-style reference ("B3")
    pub reference: String,
    /// Position within the grid
    pub address: CellAddress,
    /// Raw text as it appeared in the snapshot
    pub raw: String,
    /// Parsed numeric value, if the text is numeric
    pub number: Option<f64>,
    /// Classification of the raw text
    pub kind: CellKind,
}

impl Cell {
    fn scan(row: u32, col: u32, raw: &str) -> Self {
        let number = parse_numeric(raw);
        let kind = if raw.trim().is_empty() {
            CellKind::Empty
        } else if number.is_some() {
            CellKind::Number
        } else {
            CellKind::Text
        };

        Self {
            reference: format!("{}{}", column_label(col), row + 1),
            address: CellAddress::new(row, col),
            raw: raw.to_string(),
            number,
            kind,
        }
    }

    /// Whether this cell scanned as numeric
    pub fn is_number(&self) -> bool {
        self.kind == CellKind::Number
    }
}

/// An immutable, typed snapshot of a table's text content.
///
/// A grid is a pure function of the raw rows it was scanned from: it has no
/// lifecycle of its own and is simply rebuilt whenever the underlying table
/// text changes. Evaluation never mutates it, which is what makes
/// concurrent evaluations against the same snapshot safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    row_count: u32,
    col_count: u32,
    /// Row-major cell matrix; every row has exactly `col_count` cells
    cells: Vec<Vec<Cell>>,
    /// Canonical reference → (row, col), one entry per cell
    by_reference: AHashMap<String, (u32, u32)>,
}

impl Grid {
    /// Scan raw rows of text into a typed grid.
    ///
    /// Degenerate input (no rows, or rows of width 0) yields an empty 0×0
    /// grid. Ragged input is squared to the widest row, with missing
    /// positions scanning as [`CellKind::Empty`] — the editor hands us
    /// rectangles, but the scanner stays total.
    ///
    /// # Examples
    /// ```
    /// use quillcalc_core::{CellKind, Grid};
    ///
    /// let grid = Grid::scan(&[vec!["10", "x"], vec!["", "40"]]);
    /// assert_eq!(grid.row_count(), 2);
    /// assert_eq!(grid.by_reference("A1").unwrap().number, Some(10.0));
    /// assert_eq!(grid.by_reference("B1").unwrap().kind, CellKind::Text);
    /// assert_eq!(grid.by_reference("A2").unwrap().kind, CellKind::Empty);
    /// ```
    pub fn scan<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        let col_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if rows.is_empty() || col_count == 0 {
            return Self {
                row_count: 0,
                col_count: 0,
                cells: Vec::new(),
                by_reference: AHashMap::new(),
            };
        }

        let mut cells = Vec::with_capacity(rows.len());
        let mut by_reference = AHashMap::with_capacity(rows.len() * col_count);

        for (row_idx, raw_row) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(col_count);
            for col_idx in 0..col_count {
                let raw = raw_row.get(col_idx).map(|s| s.as_ref()).unwrap_or("");
                let cell = Cell::scan(row_idx as u32, col_idx as u32, raw);
                by_reference.insert(cell.reference.clone(), (row_idx as u32, col_idx as u32));
                row.push(cell);
            }
            cells.push(row);
        }

        Self {
            row_count: rows.len() as u32,
            col_count: col_count as u32,
            cells,
            by_reference,
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Number of columns
    pub fn col_count(&self) -> u32 {
        self.col_count
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Get a cell by position
    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
    }

    /// Get a cell by address
    pub fn cell_at(&self, addr: CellAddress) -> Option<&Cell> {
        self.cell(addr.row, addr.col)
    }

    /// Get a cell by reference string (case-insensitive)
    pub fn by_reference(&self, reference: &str) -> Option<&Cell> {
        let key = CellAddress::parse_opt(reference)?.to_a1_string();
        let (row, col) = *self.by_reference.get(&key)?;
        self.cell(row, col)
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|r| r.as_slice())
    }

    /// Iterate over all cells, row-major
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }
}
