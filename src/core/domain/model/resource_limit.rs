//! Quota limit records as published per organization or project.

use crate::core::domain::value_object::serde_helpers::loose_number;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A single limit record.
///
/// `resource` is the raw upstream key (e.g. `ram` or `ram_bytes`), not a
/// [`ResourceKind`](super::resource_kind::ResourceKind): the normalizer
/// resolves it through the alias table. A `None` ceiling means unlimited.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceLimit {
    pub resource: String,
    #[serde(
        default,
        alias = "maxTotal",
        deserialize_with = "loose_number::deserialize"
    )]
    pub max_total: Option<f64>,
    #[serde(
        default,
        alias = "maxPerBranch",
        deserialize_with = "loose_number::deserialize"
    )]
    pub max_per_branch: Option<f64>,
}

impl ResourceLimit {
    pub fn new(
        resource: impl Into<String>,
        max_total: Option<f64>,
        max_per_branch: Option<f64>,
    ) -> Self {
        Self {
            resource: resource.into(),
            max_total,
            max_per_branch,
        }
    }

    /// Parses a limits array, skipping records that cannot be read.
    ///
    /// A record without a string `resource` cannot be matched to any
    /// kind and is dropped on its own; the rest of the list survives.
    /// Non-array payloads yield no limits.
    pub fn list_from_json(payload: &Value) -> Vec<Self> {
        let Some(records) = payload.as_array() else {
            debug!("limits payload is not an array, treating as empty");
            return Vec::new();
        };
        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                match serde_json::from_value::<Self>(record.clone()) {
                    Ok(limit) => Some(limit),
                    Err(err) => {
                        debug!(index, error = %err, "dropping malformed limit record");
                        None
                    }
                }
            })
            .collect()
    }

    /// The ceiling for the given scope, `None` meaning unlimited.
    pub fn ceiling(&self, scope: LimitScope) -> Option<f64> {
        match scope {
            LimitScope::Total => self.max_total,
            LimitScope::PerBranch => self.max_per_branch,
        }
    }
}

/// Which ceiling of a limit record applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LimitScope {
    /// Aggregate across the project or organization.
    #[default]
    Total,
    /// Per branch.
    PerBranch,
}
