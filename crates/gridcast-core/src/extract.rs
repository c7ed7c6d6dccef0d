//! Typed cell value extraction
//!
//! The extraction engine coerces one [`CellValue`] into the caller-declared
//! [`DataType`] for its column. Two failure modes are kept strictly apart:
//!
//! - content the target type cannot parse (and blank or missing cells)
//!   resolves to the type's default value and is `Ok`;
//! - combinations with no coercion path at all (e.g. a numeric cell read as
//!   `Email`, or any read of an error cell) are
//!   [`Error::UnsupportedExtraction`] — a schema defect the caller should
//!   have prevented, not a data-quality issue.
//!
//! Formula cells are resolved transparently through the cached result the
//! spreadsheet backend supplied; the engine never evaluates formulas.
//!
//! # Example
//!
//! ```rust
//! use gridcast_core::{extract, CellValue, DataType, TypedValue};
//!
//! let value = extract(&CellValue::Text("42".into()), DataType::Integer).unwrap();
//! assert_eq!(value, TypedValue::Int(42));
//!
//! // Unparseable content degrades to the target's default
//! let value = extract(&CellValue::Text("n/a".into()), DataType::Integer).unwrap();
//! assert_eq!(value, TypedValue::Int(0));
//! ```

use crate::datatype::{DataType, TypedValue};
use crate::error::{Error, Result};
use crate::value::{CachedResult, CellValue};

/// Effective source of a cell, with formulas resolved to their cached result
enum Source<'a> {
    Number(f64),
    Bool(bool),
    Text(&'a str),
    Blank,
    Error,
}

impl<'a> Source<'a> {
    fn of(cell: &'a CellValue) -> Source<'a> {
        match cell {
            CellValue::Missing | CellValue::Blank => Source::Blank,
            CellValue::Number(n) => Source::Number(*n),
            CellValue::Bool(b) => Source::Bool(*b),
            CellValue::Text(s) => Source::Text(s),
            CellValue::Formula { cached, .. } => match cached {
                CachedResult::Number(n) => Source::Number(*n),
                CachedResult::Bool(b) => Source::Bool(*b),
                CachedResult::Text(s) => Source::Text(s),
                CachedResult::Error => Source::Error,
            },
            CellValue::Error => Source::Error,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Source::Number(_) => "numeric",
            Source::Bool(_) => "boolean",
            Source::Text(_) => "string",
            Source::Blank => "blank",
            Source::Error => "error",
        }
    }
}

/// Cell extraction engine
///
/// Stateless per call apart from a diagnostic record of the last-seen raw
/// cell rendering, which never influences extraction results. The record is
/// instance-local, so extractors on different threads never interfere.
#[derive(Debug, Default)]
pub struct CellExtractor {
    last_raw: Option<String>,
}

impl CellExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw textual rendering of the cell seen by the last [`extract`] call,
    /// if any
    ///
    /// [`extract`]: CellExtractor::extract
    pub fn last_raw(&self) -> Option<&str> {
        self.last_raw.as_deref()
    }

    /// Coerce `cell` into a value of the given target type
    ///
    /// Missing and blank cells yield `target.default_value()`, as does
    /// string content the target cannot parse. Combinations with no
    /// coercion path return [`Error::UnsupportedExtraction`].
    pub fn extract(&mut self, cell: &CellValue, target: DataType) -> Result<TypedValue> {
        // No cell at all: hand back the default without inspecting anything
        if cell.is_missing() {
            return Ok(target.default_value());
        }

        let raw = cell.to_string().trim().to_string();
        let source = Source::of(cell);
        let result = coerce(&source, target, &raw);
        self.last_raw = Some(raw);
        result
    }
}

/// Coerce one cell into the given target type
///
/// One-shot convenience over [`CellExtractor::extract`].
pub fn extract(cell: &CellValue, target: DataType) -> Result<TypedValue> {
    CellExtractor::new().extract(cell, target)
}

fn coerce(source: &Source<'_>, target: DataType, raw: &str) -> Result<TypedValue> {
    match source {
        Source::Number(n) => match target {
            DataType::Double => Ok(TypedValue::Float(*n)),
            DataType::DoublePercentage => Ok(TypedValue::Float(100.0 * n)),
            // Integer targets truncate toward zero; for the percentage
            // type the truncation happens before the scaling, not after.
            // Both the cast and the scaling saturate at the i64 bounds.
            DataType::Integer => Ok(TypedValue::Int(*n as i64)),
            DataType::IntegerPercentage => {
                Ok(TypedValue::Int((*n as i64).saturating_mul(100)))
            }
            _ => Err(unsupported(source, target, raw)),
        },

        Source::Bool(b) => match target {
            DataType::Boolean => Ok(TypedValue::Bool(*b)),
            DataType::String => Ok(TypedValue::Text(b.to_string())),
            DataType::Integer => Ok(TypedValue::Int(if *b { 1 } else { 0 })),
            _ => Err(unsupported(source, target, raw)),
        },

        Source::Blank => Ok(target.default_value()),

        Source::Text(s) => {
            let s = s.trim();
            match target {
                DataType::Double => Ok(match s.parse::<f64>() {
                    Ok(v) => TypedValue::Float(v),
                    Err(_) => parse_default(s, target),
                }),
                DataType::DoublePercentage => Ok(match s.parse::<f64>() {
                    Ok(v) => TypedValue::Float(100.0 * v),
                    Err(_) => parse_default(s, target),
                }),
                DataType::Integer => Ok(match s.parse::<i64>() {
                    Ok(v) => TypedValue::Int(v),
                    Err(_) => parse_default(s, target),
                }),
                DataType::IntegerPercentage => Ok(match s.parse::<i64>() {
                    Ok(v) => TypedValue::Int(v.saturating_mul(100)),
                    Err(_) => parse_default(s, target),
                }),
                DataType::Boolean => Ok(parse_bool(s)),
                DataType::Email | DataType::String => Ok(TypedValue::Text(s.to_string())),
                _ => Err(unsupported(source, target, raw)),
            }
        }

        Source::Error => Err(unsupported(source, target, raw)),
    }
}

/// Boolean token parsing: case-insensitive "true" is true, everything else
/// is false (which coincides with the Boolean default)
fn parse_bool(s: &str) -> TypedValue {
    TypedValue::Bool(s.eq_ignore_ascii_case("true"))
}

fn parse_default(s: &str, target: DataType) -> TypedValue {
    log::warn!("cannot parse {s:?} as {target}, substituting default");
    target.default_value()
}

fn unsupported(source: &Source<'_>, target: DataType, raw: &str) -> Error {
    Error::UnsupportedExtraction {
        kind: source.name(),
        target,
        raw: raw.to_string(),
    }
}
