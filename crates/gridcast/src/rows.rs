//! Row extraction against a declared column schema
//!
//! Reporting code works row by row: it declares one [`DataType`] per column
//! up front (schemas are external, never inferred from content) and asks
//! for each cell's value under that column's type.
//!
//! # Example
//!
//! ```rust
//! use gridcast::prelude::*;
//!
//! let schema = RowSchema::new()
//!     .column(DataType::String)
//!     .column(DataType::Integer)
//!     .column(DataType::DoublePercentage);
//!
//! let row = vec![
//!     CellValue::text("alice"),
//!     CellValue::Number(3.0),
//!     CellValue::Number(0.5),
//! ];
//!
//! let values = schema.extract_row(&row).unwrap();
//! assert_eq!(values[0], TypedValue::Text("alice".into()));
//! assert_eq!(values[1], TypedValue::Int(3));
//! assert_eq!(values[2], TypedValue::Float(50.0));
//! ```

use gridcast_core::{CellExtractor, CellValue, DataType, TypedValue};
use thiserror::Error;

/// Result type for row extraction
pub type RowResult<T> = std::result::Result<T, RowError>;

/// Errors that can occur during row extraction
#[derive(Debug, Error)]
pub enum RowError {
    /// Extraction failed for one column of the row
    #[error("column {column}: {source}")]
    Column {
        /// Zero-based column index within the schema
        column: usize,
        #[source]
        source: gridcast_core::Error,
    },
}

/// Declared target types for the columns of a table, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSchema {
    columns: Vec<DataType>,
}

impl RowSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one column of the given type (builder style)
    pub fn column(mut self, data_type: DataType) -> Self {
        self.columns.push(data_type);
        self
    }

    /// Append one column of the given type
    pub fn push(&mut self, data_type: DataType) {
        self.columns.push(data_type);
    }

    /// Declared type of the column at `index`
    pub fn data_type(&self, index: usize) -> Option<DataType> {
        self.columns.get(index).copied()
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema declares no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coerce one row of cells into typed values, column by column
    ///
    /// Rows shorter than the schema are fine: columns past the end of the
    /// row read as [`CellValue::Missing`] and yield their type's default.
    /// Cells past the end of the schema are ignored.
    pub fn extract_row(&self, cells: &[CellValue]) -> RowResult<Vec<TypedValue>> {
        let mut extractor = CellExtractor::new();
        let mut values = Vec::with_capacity(self.columns.len());

        for (column, &target) in self.columns.iter().enumerate() {
            let cell = cells.get(column).unwrap_or(&CellValue::Missing);
            let value = extractor
                .extract(cell, target)
                .map_err(|source| RowError::Column { column, source })?;
            values.push(value);
        }

        Ok(values)
    }
}

impl FromIterator<DataType> for RowSchema {
    fn from_iter<I: IntoIterator<Item = DataType>>(iter: I) -> Self {
        RowSchema {
            columns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_building() {
        let schema = RowSchema::new()
            .column(DataType::String)
            .column(DataType::Integer);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.data_type(0), Some(DataType::String));
        assert_eq!(schema.data_type(2), None);

        let collected: RowSchema = [DataType::String, DataType::Integer].into_iter().collect();
        assert_eq!(collected, schema);
    }

    #[test]
    fn test_short_row_fills_defaults() {
        let schema = RowSchema::new()
            .column(DataType::String)
            .column(DataType::Integer)
            .column(DataType::Boolean);

        let values = schema.extract_row(&[CellValue::text("only")]).unwrap();
        assert_eq!(values[0], TypedValue::Text("only".into()));
        assert_eq!(values[1], TypedValue::Int(0));
        assert_eq!(values[2], TypedValue::Bool(false));
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let schema = RowSchema::new().column(DataType::Integer);
        let values = schema
            .extract_row(&[CellValue::Number(1.0), CellValue::Error])
            .unwrap();
        assert_eq!(values, vec![TypedValue::Int(1)]);
    }

    #[test]
    fn test_error_carries_column_index() {
        let schema = RowSchema::new()
            .column(DataType::String)
            .column(DataType::Email);

        let err = schema
            .extract_row(&[CellValue::text("ok"), CellValue::Number(5.0)])
            .unwrap_err();
        let RowError::Column { column, .. } = err;
        assert_eq!(column, 1);
    }
}
