//! Point-in-time usage snapshots.

use crate::core::domain::value_object::serde_helpers::coerce_number;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Current consumption keyed by upstream field name.
///
/// Values are normalized at construction: anything that is not a finite
/// number is dropped, so lookups only ever see `f64`s that are safe to
/// divide.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceUsage(BTreeMap<String, f64>);

impl ResourceUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from an arbitrary JSON payload.
    ///
    /// Non-object payloads yield an empty snapshot.
    pub fn from_json(payload: &Value) -> Self {
        let Some(object) = payload.as_object() else {
            debug!("usage payload is not an object, treating as empty");
            return Self::default();
        };
        let values = object
            .iter()
            .filter_map(|(key, value)| match coerce_number(value) {
                Some(n) => Some((key.clone(), n)),
                None => {
                    debug!(key = %key, "dropping non-numeric usage value");
                    None
                }
            })
            .collect();
        Self(values)
    }

    /// Adds or replaces a value. Non-finite values are ignored.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        if value.is_finite() {
            self.0.insert(key.into(), value);
        }
        self
    }

    /// The value under `key`, if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// The first value found when trying `aliases` in order, with the
    /// alias that matched.
    pub fn first_of<'a>(&self, aliases: &'a [String]) -> Option<(&'a str, f64)> {
        aliases
            .iter()
            .find_map(|alias| self.get(alias).map(|v| (alias.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ResourceUsage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}
