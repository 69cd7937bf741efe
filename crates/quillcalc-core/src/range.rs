//! Rectangular cell ranges

use crate::address::CellAddress;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A rectangular range of cells (e.g., "A1:B10")
///
/// Always normalized: `start` is the top-left corner and `end` the
/// bottom-right, no matter which two corners the range was built from.
/// Users drag-select in every direction, so "B2:A1" must mean the same
/// rectangle as "A1:B2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left after normalization)
    pub start: CellAddress,
    /// End address (bottom-right after normalization)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new range from two corners, normalizing per axis
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse "A1:B10" notation; a lone reference parses as a single-cell range
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some((left, right)) = s.split_once(':') {
            let a = CellAddress::parse(left)
                .map_err(|_| Error::InvalidRange(s.to_string()))?;
            let b = CellAddress::parse(right)
                .map_err(|_| Error::InvalidRange(s.to_string()))?;
            Ok(Self::new(a, b))
        } else {
            let addr =
                CellAddress::parse(s).map_err(|_| Error::InvalidRange(s.to_string()))?;
            Ok(Self::single(addr))
        }
    }

    /// Check if an address is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Iterate over all addresses in the range, row-major
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
            done: false,
        }
    }

    /// Format as an A1:B10 string (single cells collapse to one reference)
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Row-major iterator over the addresses of a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u32,
    done: bool,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);

        if self.current_col < self.range.end.col {
            self.current_col += 1;
        } else if self.current_row < self.range.end.row {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        } else {
            self.done = true;
        }

        Some(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalization() {
        let canonical = CellRange::parse("A1:B2").unwrap();

        // All four corner orders describe the same rectangle.
        for s in ["A1:B2", "B2:A1", "A2:B1", "B1:A2"] {
            assert_eq!(CellRange::parse(s).unwrap(), canonical, "{}", s);
        }

        assert_eq!(canonical.start, CellAddress::new(0, 0));
        assert_eq!(canonical.end, CellAddress::new(1, 1));
    }

    #[test]
    fn test_parse_single() {
        let range = CellRange::parse("C3").unwrap();
        assert_eq!(range.start, CellAddress::new(2, 2));
        assert_eq!(range.end, CellAddress::new(2, 2));
        assert_eq!(range.cell_count(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(CellRange::parse("").is_err());
        assert!(CellRange::parse("A1:").is_err());
        assert!(CellRange::parse(":B2").is_err());
        assert!(CellRange::parse("A1:B2:C3").is_err());
        assert!(CellRange::parse("ABOVE").is_err());
    }

    #[test]
    fn test_contains() {
        let range = CellRange::parse("B2:D4").unwrap();

        assert!(range.contains(&CellAddress::new(1, 1))); // B2
        assert!(range.contains(&CellAddress::new(3, 3))); // D4
        assert!(range.contains(&CellAddress::new(2, 2))); // C3

        assert!(!range.contains(&CellAddress::new(0, 0))); // A1
        assert!(!range.contains(&CellAddress::new(4, 1))); // B5
    }

    #[test]
    fn test_iterator_row_major() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(
            cells,
            vec![
                CellAddress::new(0, 0), // A1
                CellAddress::new(0, 1), // B1
                CellAddress::new(1, 0), // A2
                CellAddress::new(1, 1), // B2
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CellRange::parse("B2:A1").unwrap().to_string(), "A1:B2");
        assert_eq!(CellRange::parse("C3").unwrap().to_string(), "C3");
    }
}
