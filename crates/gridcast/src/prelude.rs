//! Prelude module - common imports for gridcast users
//!
//! ```rust
//! use gridcast::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CachedResult,
    CellExtractor,
    CellValue,
    // Target types
    DataKind,
    DataType,
    // Error types
    Error,
    // File types
    FileType,
    Result,
    // Row extraction
    RowError,
    RowResult,
    RowSchema,
    TypedValue,
    ALL_DATA_TYPES,
    ALL_FILE_TYPES,
};

pub use crate::extract;
