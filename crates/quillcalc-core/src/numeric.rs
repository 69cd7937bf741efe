//! Numeric classification of raw cell text
//!
//! Table cells arrive as arbitrary user text: "1200", "$1,200.50", "50%",
//! "(500)". This module is the single source of truth for whether such
//! text is numeric and what number it denotes — the grid scanner and every
//! resolver go through [`parse_numeric`] rather than calling `str::parse`
//! directly.

/// Currency symbols tolerated (and ignored) in numeric cells
const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Parse raw cell text into a number, or `None` if the text is not numeric.
///
/// Tolerates currency symbols, thousands separators, internal whitespace,
/// a trailing percent sign (divides by 100), and parenthesized negatives
/// (accounting convention).
///
/// # Examples
/// ```
/// use quillcalc_core::parse_numeric;
///
/// assert_eq!(parse_numeric("$1,200.50"), Some(1200.50));
/// assert_eq!(parse_numeric("50%"), Some(0.5));
/// assert_eq!(parse_numeric("(500)"), Some(-500.0));
/// assert_eq!(parse_numeric("abc"), None);
/// ```
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (body, percent) = match trimmed.strip_suffix('%') {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };

    let cleaned: String = body
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',' && !c.is_whitespace())
        .collect();

    // "(500)" is accounting shorthand for -500.
    let candidate = match cleaned.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => format!("-{}", inner),
        None => cleaned,
    };

    let value: f64 = candidate.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(if percent { value / 100.0 } else { value })
}
