//! Resolved attribute values.
//!
//! Raw attributes are always strings. What a read returns depends on whether a
//! parser is registered for the attribute: without one the raw string comes back
//! untouched as [`AttrValue::Text`]; with one, whatever the parser produced.

use serde::{Deserialize, Serialize};

/// Runtime representation of a resolved attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Simple boolean (e.g. `visible="yes"` after a boolean parser)
    Bool(bool),

    /// Whole number (e.g. `width="10"` after an integer parser)
    Int(i64),

    /// Floating point number (e.g. `opacity="0.5"`)
    Float(f64),

    /// Unparsed or string-valued attribute, exactly as written
    Text(String),

    /// List of strings (e.g. `classes="a, b"` after a list parser)
    List(Vec<String>),
}

impl AttrValue {
    pub fn text(value: impl Into<String>) -> Self {
        AttrValue::Text(value.into())
    }

    /// Check if this value represents a "truthy" state.
    ///
    /// - Bool: the boolean value itself
    /// - Int / Float: non-zero
    /// - Text: non-empty
    /// - List: non-empty
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Bool(v) => *v,
            AttrValue::Int(v) => *v != 0,
            AttrValue::Float(v) => *v != 0.0,
            AttrValue::Text(v) => !v.is_empty(),
            AttrValue::List(v) => !v.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the number as `f64`; integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}
