use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::errors::{JsonGetError, Result};

/// Expected shape of a resolved value.
///
/// `Float` matches any number; `Int` only numbers without a fractional part.
/// `ListOf` additionally requires every element to match the inner type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum JsonType {
    /// Skip validation.
    #[default]
    Any,
    Str,
    Int,
    Float,
    Bool,
    Array,
    Object,
    Null,
    ListOf(Box<JsonType>),
}

impl JsonType {
    pub fn list_of(inner: JsonType) -> Self {
        JsonType::ListOf(Box::new(inner))
    }

    /// Name used in mismatch messages.
    pub fn name(&self) -> &'static str {
        match self {
            JsonType::Any => "any",
            JsonType::Str => "str",
            JsonType::Int => "int",
            JsonType::Float => "float",
            JsonType::Bool => "bool",
            JsonType::Array | JsonType::ListOf(_) => "list",
            JsonType::Object => "dict",
            JsonType::Null => "None",
        }
    }
}

/// Text form accepted by `FromStr`: `list<int>`, `list<list<str>>`, etc.
impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonType::ListOf(inner) => write!(f, "list<{inner}>"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for JsonType {
    type Err = JsonGetError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        if let Some(inner) = t
            .strip_prefix("list<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return inner
                .parse()
                .map(JsonType::list_of)
                .map_err(|_| JsonGetError::UnsupportedType(s.to_string()));
        }
        Ok(match t {
            "any" => JsonType::Any,
            "str" | "string" => JsonType::Str,
            "int" | "integer" => JsonType::Int,
            "float" | "number" => JsonType::Float,
            "bool" | "boolean" => JsonType::Bool,
            "list" | "array" => JsonType::Array,
            "dict" | "object" => JsonType::Object,
            "null" | "None" => JsonType::Null,
            _ => return Err(JsonGetError::UnsupportedType(s.to_string())),
        })
    }
}

/// Kind name of a value as it appears in mismatch messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "None",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0),
        _ => false,
    }
}

/// Check that `value` has the shape `expected` describes.
///
/// For `ListOf`, the first failing element's own mismatch is returned.
pub fn check_type(value: &Value, expected: &JsonType) -> Result<()> {
    let ok = match (expected, value) {
        (JsonType::Any, _) => true,
        (JsonType::Null, Value::Null) => true,
        (JsonType::Float, Value::Number(_)) => true,
        (JsonType::Int, v) => is_integral(v),
        (JsonType::Str, Value::String(_)) => true,
        (JsonType::Bool, Value::Bool(_)) => true,
        (JsonType::Array, Value::Array(_)) => true,
        (JsonType::Object, Value::Object(_)) => true,
        (JsonType::ListOf(inner), Value::Array(items)) => {
            for item in items {
                check_type(item, inner)?;
            }
            true
        }
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(JsonGetError::TypeMismatch {
            expected: expected.name().to_string(),
            actual: type_name(value),
        })
    }
}
