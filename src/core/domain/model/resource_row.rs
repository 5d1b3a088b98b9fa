//! Normalized per-resource rows ready for percentage bars and badges.

use super::resource_kind::ResourceKind;
use serde::Serialize;

/// The quota ceiling a row is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Ceiling {
    /// A published, finite ceiling in raw units.
    Bounded(f64),
    /// A limit record exists but sets no ceiling.
    Unlimited,
    /// No limit record exists for this kind.
    Unknown,
}

impl Ceiling {
    /// The raw ceiling, if there is a number to show.
    pub fn raw(&self) -> Option<f64> {
        match self {
            Ceiling::Bounded(max) => Some(*max),
            Ceiling::Unlimited | Ceiling::Unknown => None,
        }
    }
}

/// One resource kind's consumption against its ceiling.
///
/// `percent` is `None` whenever there is no usable ceiling (unlimited,
/// unknown, or zero); otherwise it lies in `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRow {
    pub resource: ResourceKind,
    pub used_raw: f64,
    pub ceiling: Ceiling,
    pub used_display: String,
    pub max_display: String,
    pub percent: Option<f64>,
}

impl ResourceRow {
    pub fn max_raw(&self) -> Option<f64> {
        self.ceiling.raw()
    }
}

/// Percentage of `max` consumed by `used`, `None` when `max` is not a
/// usable ceiling.
///
/// The result reaches exactly 100 only when `used >= max`.
pub fn percent_used(used: f64, max: f64) -> Option<f64> {
    if !max.is_finite() || max <= 0.0 {
        return None;
    }
    if !used.is_finite() {
        return Some(0.0);
    }
    if used >= max {
        return Some(100.0);
    }
    let below_full = f64::from_bits(100f64.to_bits() - 1);
    Some((used / max * 100.0).clamp(0.0, below_full))
}
