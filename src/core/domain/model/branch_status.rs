//! Classification of raw branch status strings.
//!
//! Status transitions happen server-side; this module only reads the
//! latest raw value and buckets it. Every membership check lives in
//! [`classify`], the predicates are derived from it.

use serde::{Deserialize, Serialize};

/// The bucket a raw branch status falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BranchStatusClass {
    Active,
    ActiveUnhealthy,
    Stopped,
    Transitional,
    Error,
    Unknown,
}

/// Classifies a raw status. Total over all inputs: anything not
/// recognized, including `None` and the empty string, is `Unknown`.
///
/// Matching ignores surrounding whitespace and ASCII case.
pub fn classify(raw_status: Option<&str>) -> BranchStatusClass {
    let Some(raw) = raw_status else {
        return BranchStatusClass::Unknown;
    };
    match raw.trim().to_ascii_uppercase().as_str() {
        "ACTIVE_HEALTHY" => BranchStatusClass::Active,
        "ACTIVE_UNHEALTHY" => BranchStatusClass::ActiveUnhealthy,
        "STARTING" | "CREATING" | "DELETING" | "UPDATING" | "RESTARTING" | "STOPPING"
        | "COMING_UP" | "GOING_DOWN" | "RESIZING" | "RESTORING" | "UPGRADING" | "PAUSING" => {
            BranchStatusClass::Transitional
        }
        "STOPPED" | "INACTIVE" | "PAUSED" => BranchStatusClass::Stopped,
        "ERROR" | "INIT_FAILED" | "PAUSE_FAILED" | "RESTORE_FAILED" => BranchStatusClass::Error,
        _ => BranchStatusClass::Unknown,
    }
}

impl BranchStatusClass {
    /// Healthy or unhealthy, but running.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            BranchStatusClass::Active | BranchStatusClass::ActiveUnhealthy
        )
    }

    pub fn is_transitional(self) -> bool {
        self == BranchStatusClass::Transitional
    }

    pub fn is_stopped(self) -> bool {
        self == BranchStatusClass::Stopped
    }

    pub fn is_error(self) -> bool {
        self == BranchStatusClass::Error
    }
}

impl From<Option<&str>> for BranchStatusClass {
    fn from(raw: Option<&str>) -> Self {
        classify(raw)
    }
}

pub fn is_active(raw_status: Option<&str>) -> bool {
    classify(raw_status).is_active()
}

pub fn is_transitional(raw_status: Option<&str>) -> bool {
    classify(raw_status).is_transitional()
}

pub fn is_stopped(raw_status: Option<&str>) -> bool {
    classify(raw_status).is_stopped()
}

pub fn is_error(raw_status: Option<&str>) -> bool {
    classify(raw_status).is_error()
}
