//! Raw platform units to display strings.

use crate::core::domain::model::resource_kind::ResourceKind;

/// Placeholder shown when there is no value to convert.
pub const NOT_APPLICABLE: &str = "—";

/// Converts a raw value into the kind's display unit.
///
/// Non-finite input is treated as zero.
pub fn to_display_value(raw: f64, kind: ResourceKind) -> f64 {
    let raw = if raw.is_finite() { raw } else { 0.0 };
    raw / kind.display_unit().divisor
}

/// Formats a display value: two decimals below 10 units, otherwise the
/// nearest integer.
///
/// The threshold applies to the value as shown, so anything that rounds
/// to `10.00` is rendered as `10`.
pub fn format_display_value(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let hundredths = (value * 100.0).round() / 100.0;
    if hundredths.abs() < 10.0 {
        format!("{hundredths:.2}")
    } else {
        format!("{:.0}", value.round())
    }
}

/// Renders a raw value with its display unit, e.g. `"3.73 GiB"`.
///
/// `None` means "not applicable" and renders as [`NOT_APPLICABLE`].
pub fn to_display_unit(raw: Option<f64>, kind: ResourceKind) -> String {
    match raw {
        None => NOT_APPLICABLE.to_string(),
        Some(raw) => format!(
            "{} {}",
            format_display_value(to_display_value(raw, kind)),
            kind.display_unit().suffix
        ),
    }
}
