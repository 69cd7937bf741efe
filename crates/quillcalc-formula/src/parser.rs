//! Formula parsing
//!
//! The table formula language is a single function application over one
//! argument: `=SUM(ABOVE)`, `=AVERAGE(A1:B3)`, `=COUNT(A1)`. Parsing
//! splits the text into a function name and an argument, then classifies
//! the argument as a direction keyword, a range literal, or a single cell
//! reference.

use once_cell::sync::Lazy;
use quillcalc_core::{CellAddress, CellRange};
use regex::Regex;

use crate::error::{EvalError, EvalResult};

/// Overall FUNCTION(ARGUMENT) shape, matched after uppercasing
static FORMULA_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Z0-9]*)\s*\((.*)\)$").unwrap());

/// The supported aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Sum,
    Average,
    Count,
    Max,
    Min,
    Product,
}

impl AggregateFunction {
    /// Look up a function by its (already uppercased) name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SUM" => Some(Self::Sum),
            "AVERAGE" => Some(Self::Average),
            "COUNT" => Some(Self::Count),
            "MAX" => Some(Self::Max),
            "MIN" => Some(Self::Min),
            "PRODUCT" => Some(Self::Product),
            _ => None,
        }
    }

    /// Canonical (uppercase) name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Average => "AVERAGE",
            Self::Count => "COUNT",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Product => "PRODUCT",
        }
    }

    /// Apply the aggregate to a non-empty list of values.
    ///
    /// The empty case never reaches here: the evaluator short-circuits an
    /// empty resolved list to 0 before applying any function.
    pub fn apply(&self, values: &[f64]) -> f64 {
        debug_assert!(!values.is_empty());
        match self {
            Self::Sum => values.iter().sum(),
            Self::Average => values.iter().sum::<f64>() / values.len() as f64,
            Self::Count => values.len() as f64,
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Product => values.iter().product(),
        }
    }
}

/// A directional argument, resolved relative to the current cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
}

impl Direction {
    /// Look up a direction by its (already uppercased) keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "ABOVE" => Some(Self::Above),
            "BELOW" => Some(Self::Below),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            _ => None,
        }
    }
}

/// A classified formula argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormulaArg {
    /// Directional keyword (ABOVE/BELOW/LEFT/RIGHT)
    Direction(Direction),
    /// Range literal (A1:B3, corners in any order)
    Range(CellRange),
    /// Single cell reference (A1)
    Cell(CellAddress),
}

/// A parsed formula: one aggregate applied to one argument
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaInvocation {
    /// The aggregate to apply
    pub function: AggregateFunction,
    /// The classified argument
    pub argument: FormulaArg,
    /// Argument text as the user wrote it (uppercased), for the trace
    pub argument_text: String,
}

/// Parse a formula string into an invocation.
///
/// A leading `=` is optional; names and references are case-insensitive.
///
/// # Examples
/// ```
/// use quillcalc_formula::{parse_formula, AggregateFunction, EvalError};
///
/// let inv = parse_formula("=sum(above)").unwrap();
/// assert_eq!(inv.function, AggregateFunction::Sum);
///
/// assert_eq!(parse_formula("=SUM"), Err(EvalError::BadFormat));
/// assert_eq!(parse_formula("=SUM()"), Err(EvalError::MissingArgument));
/// ```
pub fn parse_formula(formula: &str) -> EvalResult<FormulaInvocation> {
    let text = formula.trim();
    let text = text.strip_prefix('=').unwrap_or(text).trim();
    let text = text.to_uppercase();

    let caps = FORMULA_SHAPE.captures(&text).ok_or(EvalError::BadFormat)?;
    let name = &caps[1];
    let arg_text = caps[2].trim().to_string();

    if arg_text.is_empty() {
        return Err(EvalError::MissingArgument);
    }

    let function =
        AggregateFunction::from_name(name).ok_or_else(|| EvalError::UnknownFunction(name.into()))?;
    let argument = classify_argument(&arg_text)?;

    Ok(FormulaInvocation {
        function,
        argument,
        argument_text: arg_text,
    })
}

/// Classify an argument: direction keyword, range literal, or single reference.
///
/// Tried in that order; text matching none of the three shapes is an
/// invalid reference (the FUNCTION(ARGUMENT) shape already matched, so
/// the reference is what failed).
fn classify_argument(arg: &str) -> EvalResult<FormulaArg> {
    if let Some(direction) = Direction::from_keyword(arg) {
        return Ok(FormulaArg::Direction(direction));
    }

    if arg.contains(':') {
        let range = CellRange::parse(arg)?;
        return Ok(FormulaArg::Range(range));
    }

    let addr = CellAddress::parse(arg)?;
    Ok(FormulaArg::Cell(addr))
}
