//! Attribute values as handed over by the comparison engine

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A single attribute value taken from one configuration snapshot.
///
/// Foreign data is converted into this type once, at the boundary, so the
/// matcher only ever inspects a closed set of variants.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// The snapshot does not carry the attribute.
    #[default]
    Absent,
    String(String),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
}

impl Value {
    /// True when the value carries nothing: absent, or an empty string.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// String form of the value, or `None` when absent.
    ///
    /// Floating-point values keep a fractional part, so `3.0` reads `"3.0"`.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Absent => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Integer(v) => Some(Cow::Owned(v.to_string())),
            Value::Long(v) => Some(Cow::Owned(v.to_string())),
            Value::Float(v) => Some(Cow::Owned(format!("{v:?}"))),
            Value::Double(v) => Some(Cow::Owned(format!("{v:?}"))),
            Value::Boolean(v) => Some(Cow::Borrowed(if *v { "true" } else { "false" })),
        }
    }

    /// True when the value can be read unambiguously as a boolean.
    ///
    /// Native booleans, 32-bit integers 0 and 1, and the strings `true`,
    /// `false`, `1` and `0` (case-insensitive) qualify. Longs and
    /// floating-point values never do.
    pub fn is_boolean_like(&self) -> bool {
        match self {
            Value::Boolean(_) => true,
            Value::Integer(v) => *v == 0 || *v == 1,
            Value::String(s) => coerce_boolean(s).is_ok(),
            _ => false,
        }
    }

    /// Coerce the value to a boolean through its string form.
    pub fn to_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(v) => Ok(*v),
            other => coerce_boolean(&other.text().unwrap_or_default()),
        }
    }

    /// Convert a JSON scalar into a value.
    ///
    /// Integers that fit in 32 bits become [`Value::Integer`], larger ones
    /// [`Value::Long`]; other numbers become [`Value::Double`]. Arrays and
    /// objects are carried as their JSON text.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    match i32::try_from(i) {
                        Ok(small) => Value::Integer(small),
                        Err(_) => Value::Long(i),
                    }
                } else {
                    Value::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            other => Value::String(other.to_string()),
        }
    }
}

/// Coerce a boolean literal: `true`/`1` and `false`/`0`, case-insensitive.
pub fn coerce_boolean(literal: &str) -> Result<bool> {
    if literal.eq_ignore_ascii_case("true") || literal == "1" {
        Ok(true)
    } else if literal.eq_ignore_ascii_case("false") || literal == "0" {
        Ok(false)
    } else {
        Err(Error::InvalidBooleanLiteral {
            value: literal.to_string(),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("<absent>"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}
