//! Target data types and their coerced values
//!
//! A [`DataType`] is the caller-declared type a cell's content should be
//! coerced into; each one carries a broad [`DataKind`] and a canonical
//! default value used whenever extraction cannot produce a real value.

use std::fmt;

/// Broad category a [`DataType`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataKind {
    String,
    Numeric,
    Boolean,
}

/// Target type a cell value is coerced into
///
/// The percentage types scale numeric content by 100 during extraction;
/// `Email` is a semantic label only (no syntax validation is performed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    String,
    Integer,
    Email,
    Boolean,
    Double,
    IntegerPercentage,
    DoublePercentage,
    Undefined,
}

/// All data types, for iteration over the closed set
pub const ALL_DATA_TYPES: [DataType; 8] = [
    DataType::String,
    DataType::Integer,
    DataType::Email,
    DataType::Boolean,
    DataType::Double,
    DataType::IntegerPercentage,
    DataType::DoublePercentage,
    DataType::Undefined,
];

impl DataType {
    /// Get the kind this type belongs to
    pub fn kind(&self) -> DataKind {
        match self {
            DataType::String | DataType::Email | DataType::Undefined => DataKind::String,
            DataType::Integer
            | DataType::Double
            | DataType::IntegerPercentage
            | DataType::DoublePercentage => DataKind::Numeric,
            DataType::Boolean => DataKind::Boolean,
        }
    }

    /// Get the default value substituted when extraction cannot produce a
    /// real value
    pub fn default_value(&self) -> TypedValue {
        match self {
            DataType::String | DataType::Email => TypedValue::Text(String::new()),
            DataType::Integer | DataType::IntegerPercentage => TypedValue::Int(0),
            DataType::Double | DataType::DoublePercentage => TypedValue::Float(0.0),
            DataType::Boolean => TypedValue::Bool(false),
            DataType::Undefined => TypedValue::Text("Undefined".into()),
        }
    }

    /// Get the display name for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Integer => "Integer",
            DataType::Email => "Email",
            DataType::Boolean => "Boolean",
            DataType::Double => "Double",
            DataType::IntegerPercentage => "IntegerPercentage",
            DataType::DoublePercentage => "DoublePercentage",
            DataType::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A successfully coerced cell value
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypedValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl TypedValue {
    /// Get the kind of this value
    pub fn kind(&self) -> DataKind {
        match self {
            TypedValue::Text(_) => DataKind::String,
            TypedValue::Int(_) | TypedValue::Float(_) => DataKind::Numeric,
            TypedValue::Bool(_) => DataKind::Boolean,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TypedValue::Float(n) => Some(*n),
            TypedValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Text(s) => write!(f, "{}", s),
            TypedValue::Int(n) => write!(f, "{}", n),
            TypedValue::Float(n) => write!(f, "{}", n),
            TypedValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_value_matches_kind() {
        for t in ALL_DATA_TYPES {
            assert_eq!(
                t.default_value().kind(),
                t.kind(),
                "default of {t} has the wrong kind"
            );
        }
    }

    #[test]
    fn test_default_values() {
        assert_eq!(DataType::String.default_value(), TypedValue::Text("".into()));
        assert_eq!(DataType::Email.default_value(), TypedValue::Text("".into()));
        assert_eq!(DataType::Integer.default_value(), TypedValue::Int(0));
        assert_eq!(DataType::IntegerPercentage.default_value(), TypedValue::Int(0));
        assert_eq!(DataType::Double.default_value(), TypedValue::Float(0.0));
        assert_eq!(DataType::DoublePercentage.default_value(), TypedValue::Float(0.0));
        assert_eq!(DataType::Boolean.default_value(), TypedValue::Bool(false));
        assert_eq!(
            DataType::Undefined.default_value(),
            TypedValue::Text("Undefined".into())
        );
    }

    #[test]
    fn test_typed_value_accessors() {
        assert_eq!(TypedValue::Int(7).as_int(), Some(7));
        assert_eq!(TypedValue::Int(7).as_float(), Some(7.0));
        assert_eq!(TypedValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(TypedValue::Float(1.5).as_int(), None);
        assert_eq!(TypedValue::Bool(true).as_bool(), Some(true));
        assert_eq!(TypedValue::Text("a".into()).as_text(), Some("a"));
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::IntegerPercentage.to_string(), "IntegerPercentage");
        assert_eq!(TypedValue::Bool(true).to_string(), "true");
        assert_eq!(TypedValue::Float(3.5).to_string(), "3.5");
    }
}
