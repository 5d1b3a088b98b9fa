mod disk_size;
mod provisioned_iops;
mod replica_count;
pub(crate) mod serde_helpers;
mod throughput;

pub use disk_size::DiskSizeGb;
pub use provisioned_iops::ProvisionedIops;
pub use replica_count::ReplicaCount;
pub use throughput::ThroughputMbps;

// Re-export validation functions for internal use
pub(crate) use disk_size::validate_disk_size;
pub(crate) use provisioned_iops::validate_iops;
pub(crate) use throughput::validate_throughput;

use crate::core::domain::error::PricingError;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Converts a raw form value into a non-negative decimal.
///
/// Shared by the disk dimension value objects so NaN, infinities and
/// negative numbers are rejected the same way everywhere.
pub(crate) fn non_negative_decimal(field: &str, value: f64) -> Result<Decimal, PricingError> {
    let invalid = || PricingError::InvalidDimension {
        field: field.to_string(),
        value: value.to_string(),
    };
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Decimal::from_f64(value).ok_or_else(invalid)
}
