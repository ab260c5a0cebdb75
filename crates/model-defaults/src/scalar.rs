//! Declared scalar types for attribute defaults

use std::fmt;

use serde::Serialize;

/// Scalar kind declared for an attribute in the definition catalogue.
///
/// Only [`ScalarType::Boolean`] changes how default values are compared;
/// every other kind compares by exact string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    #[default]
    String,
    Integer,
    Long,
    Boolean,
    Float,
    Double,
}

impl ScalarType {
    /// Resolve a type token such as `int` or `Boolean`.
    ///
    /// Matching is case-insensitive. Unrecognized tokens resolve to
    /// [`ScalarType::String`], the same as a key with no type prefix.
    pub fn resolve(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "int" | "integer" => ScalarType::Integer,
            "long" => ScalarType::Long,
            "boolean" => ScalarType::Boolean,
            "float" => ScalarType::Float,
            "double" => ScalarType::Double,
            _ => ScalarType::String,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, ScalarType::Boolean)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::String => write!(f, "string"),
            ScalarType::Integer => write!(f, "integer"),
            ScalarType::Long => write!(f, "long"),
            ScalarType::Boolean => write!(f, "boolean"),
            ScalarType::Float => write!(f, "float"),
            ScalarType::Double => write!(f, "double"),
        }
    }
}
