//! Cell addresses and the A1 reference codec

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell position within a scanned grid.
///
/// Both coordinates are 0-based internally; the A1 text form uses 1-based
/// row numbers ("A1" is row 0, column 0). Document tables have no fixed
/// size limit, so no bounds are enforced here — a reference is valid as
/// text even if the grid it is resolved against is smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., AA=26)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse an A1-style reference, returning `None` on non-match.
    ///
    /// This is the speculative form used when classifying formula
    /// arguments: text that is not shaped like a reference (a direction
    /// keyword, stray punctuation) is simply not one, which is never an
    /// error at this layer. Input is case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use quillcalc_core::CellAddress;
    ///
    /// assert_eq!(CellAddress::parse_opt("B3"), Some(CellAddress::new(2, 1)));
    /// assert_eq!(CellAddress::parse_opt("b3"), Some(CellAddress::new(2, 1)));
    /// assert_eq!(CellAddress::parse_opt("ABOVE"), None);
    /// assert_eq!(CellAddress::parse_opt("3B"), None);
    /// ```
    pub fn parse_opt(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        let letters_end = bytes
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(bytes.len());
        if letters_end == 0 || letters_end == bytes.len() {
            return None;
        }

        let (letters, digits) = s.split_at(letters_end);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let col = column_index(letters).ok()?;
        // Row numbers are 1-based in text; "A0" is not a reference.
        let row: u32 = digits.parse().ok().filter(|&r| r > 0)?;

        Some(Self { row: row - 1, col })
    }

    /// Parse an A1-style reference, for callers that require one.
    ///
    /// # Examples
    /// ```
    /// use quillcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("C10").unwrap();
    /// assert_eq!(addr.row, 9);
    /// assert_eq!(addr.col, 2);
    /// assert!(CellAddress::parse("C0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_opt(s).ok_or_else(|| Error::InvalidReference(s.trim().to_string()))
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", column_label(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
///
/// Bijective base-26: there is no zero digit, so "A" follows from 0 and
/// "AA" from 26 rather than from a carry.
pub fn column_label(col: u32) -> String {
    let mut result = String::new();
    let mut n = col as u64 + 1; // 1-based for the encoding

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to an index (A = 0, Z = 25, AA = 26, etc.)
///
/// Case-insensitive; fails on empty input or non-letter characters.
pub fn column_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidReference("empty column letters".into()));
    }

    let mut col: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidReference(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u64 - 'A' as u64 + 1);
        if col > u32::MAX as u64 {
            return Err(Error::InvalidReference(format!(
                "column '{}' out of range",
                letters
            )));
        }
    }

    Ok((col - 1) as u32)
}
