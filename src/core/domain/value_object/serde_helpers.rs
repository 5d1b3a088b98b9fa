//! Serde helpers for loosely-typed upstream payloads.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces a JSON value into a finite number.
///
/// Numbers and numeric strings are accepted. `null`, booleans, objects,
/// arrays, unparsable strings and non-finite values all collapse to `None`.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Deserialization for `Option<f64>` fields that may arrive as a number,
/// a numeric string, `null`, or something else entirely.
pub mod loose_number {
    use super::*;

    /// Deserialize any JSON value into `Option<f64>` without failing.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_number(&value))
    }
}
