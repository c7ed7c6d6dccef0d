//! # gridcast
//!
//! Typed value extraction for spreadsheet-like tabular data.
//!
//! A spreadsheet cell is weakly typed: it may hold a number, a string, a
//! boolean, a formula's cached result, an error, or nothing at all.
//! Reporting code, on the other hand, declares exactly what type each
//! column should produce. gridcast sits between the two: it coerces raw
//! cells into declared [`DataType`]s, scaling percentages, resolving
//! formula results, and substituting deterministic defaults where the
//! content cannot be parsed.
//!
//! ## Example
//!
//! ```rust
//! use gridcast::prelude::*;
//!
//! // One row of parsed cells, as a spreadsheet backend would supply them
//! let row = vec![
//!     CellValue::text("bob@example.com"),
//!     CellValue::Number(7.9),
//!     CellValue::formula("=C1>0", CachedResult::Bool(true)),
//! ];
//!
//! let schema = RowSchema::new()
//!     .column(DataType::Email)
//!     .column(DataType::IntegerPercentage)
//!     .column(DataType::Boolean);
//!
//! let values = schema.extract_row(&row).unwrap();
//! assert_eq!(values[1], TypedValue::Int(700)); // truncated, then scaled
//! ```

pub mod file_type;
pub mod prelude;
pub mod propmap;
pub mod rows;

// Re-export core types
pub use gridcast_core::{
    extract, CachedResult, CellExtractor, CellValue, DataKind, DataType, Error, Result,
    TypedValue, ALL_DATA_TYPES,
};

pub use file_type::{FileType, ALL_FILE_TYPES};
pub use propmap::parse_map;
pub use rows::{RowError, RowResult, RowSchema};
