//! Human-readable rendering of demo values.

use serde_json::Value as Json;

use crate::core::value::Value;

/// How a value is rendered, resolved in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStrategy {
    /// Ordered sequence: JSON array literal.
    Sequence,
    /// Associative map: `Map([[k,v],...])`.
    Map,
    /// Unique-value set: `Set([...])`.
    Set,
    /// Any other structured value: JSON object literal.
    Object,
    /// Default string conversion.
    Scalar,
}

/// Pick the display strategy for `value`.
pub fn strategy_for(value: &Value) -> DisplayStrategy {
    match value {
        Value::Array(_) => DisplayStrategy::Sequence,
        Value::Map(_) => DisplayStrategy::Map,
        Value::Set(_) => DisplayStrategy::Set,
        Value::Object(_) => DisplayStrategy::Object,
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::Str(_) => DisplayStrategy::Scalar,
    }
}

/// Render `value` for display. Never fails.
pub fn format_value(value: &Value) -> String {
    match (strategy_for(value), value) {
        (DisplayStrategy::Map, Value::Map(entries)) => {
            let pairs = entries
                .iter()
                .map(|(key, val)| Json::Array(vec![key.to_json(), val.to_json()]))
                .collect();
            format!("Map({})", Json::Array(pairs))
        }
        (DisplayStrategy::Set, Value::Set(members)) => {
            let members = members.iter().map(Value::to_json).collect();
            format!("Set({})", Json::Array(members))
        }
        (DisplayStrategy::Sequence | DisplayStrategy::Object, _) => value.serialize(),
        _ => value.to_display_string(),
    }
}
