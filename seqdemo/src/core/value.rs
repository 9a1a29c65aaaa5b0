//! Dynamic value model shown by the demo.
//!
//! Sequences hold loosely-typed elements, so operations and the formatter work
//! on a closed [`Value`] enum rather than on generic `T`.

use serde_json::{Map as JsonMap, Number, Value as Json};

/// A single demo value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<Value>),
    /// Plain record; fields keep insertion order.
    Object(Vec<(String, Value)>),
    /// Key-ordered associative map; entries keep insertion order.
    Map(Vec<(Value, Value)>),
    /// Unique-value set; members keep insertion order.
    Set(Vec<Value>),
}

/// Build a sequence of string values.
pub fn strs(items: &[&str]) -> Vec<Value> {
    items.iter().map(|s| Value::from(*s)).collect()
}

impl Value {
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// JSON representation following stringify rules.
    ///
    /// - Non-finite numbers become `null`.
    /// - `Undefined` array slots become `null`; `Undefined` fields are dropped.
    /// - `Map` and `Set` have no enumerable fields and become `{}`.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Undefined | Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::Str(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(fields) => {
                let mut map = JsonMap::new();
                for (key, value) in fields {
                    if matches!(value, Value::Undefined) {
                        continue;
                    }
                    map.insert(key.clone(), value.to_json());
                }
                Json::Object(map)
            }
            Value::Map(_) | Value::Set(_) => Json::Object(JsonMap::new()),
        }
    }

    /// Compact JSON text of [`Value::to_json`].
    pub fn serialize(&self) -> String {
        self.to_json().to_string()
    }

    /// Default string conversion (what `join` and the default sort compare).
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::Str(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Map(_) => "[object Map]".to_string(),
            Value::Set(_) => "[object Set]".to_string(),
        }
    }
}

/// Strict equality: NaN is never equal to itself and composite values are
/// distinct allocations, so they never compare equal.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        _ => false,
    }
}

/// Same-value-zero: strict equality except that NaN matches NaN.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_nan() && y.is_nan() => true,
        _ => strict_equals(a, b),
    }
}

fn number_to_json(n: f64) -> Json {
    if let Some(int) = integral(n) {
        return Json::Number(Number::from(int));
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match integral(n) {
        Some(int) => int.to_string(),
        None => n.to_string(),
    }
}

/// Largest integer that round-trips exactly through `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // -0 collapses to 0 here.
        Some(n as i64)
    } else {
        None
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}
