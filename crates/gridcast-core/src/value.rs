//! Cell value types

use std::fmt;

/// Represents the value read from one spreadsheet cell, before coercion
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// No cell present at this position (e.g. a row shorter than the schema)
    ///
    /// Distinct from [`CellValue::Blank`]: a blank cell exists in the sheet
    /// but has no content.
    #[default]
    Missing,

    /// Cell present but without content
    Blank,

    /// Numeric value (all numbers stored as f64)
    Number(f64),

    /// Boolean value (TRUE/FALSE)
    Bool(bool),

    /// String value
    Text(String),

    /// Formula with its backend-computed cached result
    Formula {
        /// Original formula text (e.g., "=SUM(A1:A10)")
        text: String,
        /// Result the spreadsheet backend computed for the formula
        cached: CachedResult,
    },

    /// The backend signaled a computation error for this cell
    Error,
}

/// Cached result of a formula cell, as supplied by the spreadsheet backend
///
/// Formulas never nest: a cached result is always one of the plain
/// variants, which this type enforces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CachedResult {
    Number(f64),
    Bool(bool),
    Text(String),
    Error,
}

impl CellValue {
    /// Create a new string value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a new formula value with its cached result
    pub fn formula<S: Into<String>>(text: S, cached: CachedResult) -> Self {
        CellValue::Formula {
            text: text.into(),
            cached,
        }
    }

    /// Check if no cell is present at all
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Check if the cell is present but has no content
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula { .. })
    }

    /// Check if the cell (or a formula's cached result) is an error
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            CellValue::Error
                | CellValue::Formula {
                    cached: CachedResult::Error,
                    ..
                }
        )
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Formula { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Missing => "missing",
            CellValue::Blank => "blank",
            CellValue::Number(_) => "number",
            CellValue::Bool(_) => "boolean",
            CellValue::Text(_) => "string",
            CellValue::Formula { .. } => "formula",
            CellValue::Error => "error",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing | CellValue::Blank => write!(f, ""),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Formula { cached, .. } => write!(f, "{}", cached),
            CellValue::Error => write!(f, "#ERROR!"),
        }
    }
}

impl fmt::Display for CachedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CachedResult::Number(n) => write!(f, "{}", n),
            CachedResult::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CachedResult::Text(s) => write!(f, "{}", s),
            CachedResult::Error => write!(f, "#ERROR!"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(3.14), CellValue::Number(3.14));
        assert_eq!(CellValue::from(true), CellValue::Bool(true));
        assert_eq!(CellValue::from("hello"), CellValue::Text("hello".into()));
    }

    #[test]
    fn test_missing_vs_blank() {
        assert!(CellValue::Missing.is_missing());
        assert!(!CellValue::Missing.is_blank());
        assert!(CellValue::Blank.is_blank());
        assert!(!CellValue::Blank.is_missing());
        assert_eq!(CellValue::default(), CellValue::Missing);
    }

    #[test]
    fn test_formula_helpers() {
        let cell = CellValue::formula("=A1*2", CachedResult::Number(10.0));
        assert!(cell.is_formula());
        assert!(!cell.is_error());
        assert_eq!(cell.formula_text(), Some("=A1*2"));

        let err = CellValue::formula("=1/0", CachedResult::Error);
        assert!(err.is_error());
    }

    #[test]
    fn test_display_raw_rendering() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::Blank.to_string(), "");
        assert_eq!(CellValue::Error.to_string(), "#ERROR!");
        assert_eq!(
            CellValue::formula("=B2", CachedResult::Text("x".into())).to_string(),
            "x"
        );
    }
}
