//! # gridcast-core
//!
//! Core value model and typed cell extraction for the gridcast library.
//!
//! This crate provides the fundamental types used throughout gridcast:
//! - [`CellValue`] - One spreadsheet cell as read from a backend (numbers,
//!   strings, booleans, formula results, errors, blanks)
//! - [`DataType`] and [`DataKind`] - The closed registry of target types a
//!   cell can be coerced into, each with a canonical default value
//! - [`CellExtractor`] - The coercion engine mapping (cell, target type)
//!   pairs to [`TypedValue`]s
//!
//! ## Example
//!
//! ```rust
//! use gridcast_core::{extract, CellValue, DataType, TypedValue};
//!
//! // A numeric cell read as a percentage
//! let cell = CellValue::Number(0.25);
//! assert_eq!(
//!     extract(&cell, DataType::DoublePercentage).unwrap(),
//!     TypedValue::Float(25.0)
//! );
//!
//! // Blank cells fall back to the target's default
//! assert_eq!(
//!     extract(&CellValue::Blank, DataType::Integer).unwrap(),
//!     TypedValue::Int(0)
//! );
//! ```

pub mod datatype;
pub mod error;
pub mod extract;
pub mod value;

// Re-exports for convenience
pub use datatype::{DataKind, DataType, TypedValue, ALL_DATA_TYPES};
pub use error::{Error, Result};
pub use extract::{extract, CellExtractor};
pub use value::{CachedResult, CellValue};
