//! Error types for gridcast-core

use crate::datatype::DataType;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcast-core
///
/// Only schema-level mismatches are errors: cell content a target type
/// cannot parse degrades to the type's default value instead.
#[derive(Debug, Error)]
pub enum Error {
    /// No coercion path exists from the cell's effective kind to the
    /// requested target type
    ///
    /// The field is named `kind` rather than `source`: thiserror reserves
    /// `source` for error chaining.
    #[error("cannot extract {target} from {kind} cell (raw data: {raw:?})")]
    UnsupportedExtraction {
        /// Effective source kind of the cell
        kind: &'static str,
        /// Requested target type
        target: DataType,
        /// Raw textual rendering of the cell, for diagnostics
        raw: String,
    },
}
