//! Argument values accepted by the template engine.
//!
//! [`Value`] is the tagged union standing in for the dynamic argument lists
//! of driver bindings: the caller discriminates each argument up front and
//! rendering becomes an exhaustive match, with no runtime type inspection.

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};

/// A scalar value: the element type of lists and maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// One positional argument to `build_query`.
///
/// `Map` preserves insertion order, which is the order its entries render in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Scalar>),
    Map(Vec<(String, Scalar)>),
}

impl Scalar {
    /// Runtime type name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Null => "NULL",
            Scalar::Bool(_) => "boolean",
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "double",
            Scalar::String(_) => "string",
        }
    }
}

impl Value {
    /// Runtime type name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "double",
            Value::String(_) => "string",
            Value::List(_) | Value::Map(_) => "array",
        }
    }

    /// Build a `Map` value from ordered key/value pairs.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the string payload if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// ── Scalar conversions ───────────────────────────────────────────────────────

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Null, Into::into)
    }
}

// ── Value conversions ────────────────────────────────────────────────────────

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        match v {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(i) => Value::Int(i),
            Scalar::Float(f) => Value::Float(f),
            Scalar::String(s) => Value::String(s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, |inner| inner.into().into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

// ── JSON binding layer ───────────────────────────────────────────────────────

impl TryFrom<serde_json::Value> for Scalar {
    type Error = TemplateError;

    fn try_from(v: serde_json::Value) -> TemplateResult<Self> {
        match v {
            serde_json::Value::Null => Ok(Scalar::Null),
            serde_json::Value::Bool(b) => Ok(Scalar::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Scalar::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Scalar::Float(f))
                } else {
                    Err(TemplateError::UnsupportedActualType { actual: "number" })
                }
            }
            serde_json::Value::String(s) => Ok(Scalar::String(s)),
            serde_json::Value::Array(_) => {
                Err(TemplateError::UnsupportedActualType { actual: "array" })
            }
            serde_json::Value::Object(_) => {
                Err(TemplateError::UnsupportedActualType { actual: "object" })
            }
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = TemplateError;

    /// Convert caller-held JSON into an argument. Arrays and objects must be
    /// one level deep (scalar elements only); object entry order follows the
    /// `serde_json::Map` iteration order.
    fn try_from(v: serde_json::Value) -> TemplateResult<Self> {
        match v {
            serde_json::Value::Array(items) => Ok(Value::List(
                items
                    .into_iter()
                    .map(Scalar::try_from)
                    .collect::<TemplateResult<_>>()?,
            )),
            serde_json::Value::Object(entries) => Ok(Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((k, Scalar::try_from(v)?)))
                    .collect::<TemplateResult<_>>()?,
            )),
            scalar => Ok(Scalar::try_from(scalar)?.into()),
        }
    }
}
