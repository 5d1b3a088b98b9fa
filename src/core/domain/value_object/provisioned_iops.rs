use crate::core::domain::error::{PricingResult, ValidationError};
use rust_decimal::Decimal;

/// A validated provisioned IOPS figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionedIops(Decimal);

impl ProvisionedIops {
    /// Builds an IOPS value from raw form state, rejecting NaN and negatives.
    pub fn from_raw(iops: f64) -> PricingResult<Self> {
        super::non_negative_decimal("iops", iops).map(Self)
    }

    /// IOPS above the free allowance, never negative.
    #[must_use]
    pub fn billable(&self, included: Decimal) -> Decimal {
        (self.0 - included).max(Decimal::ZERO)
    }

    /// Returns the IOPS value.
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }
}

/// Validates an IOPS value against a storage class range and its
/// IOPS-per-GB ratio.
pub(crate) fn validate_iops(
    iops: f64,
    min: u64,
    max: u64,
    size_gb: f64,
    max_per_gb: u64,
) -> Result<(), ValidationError> {
    if !iops.is_finite() || iops.fract() != 0.0 {
        return Err(ValidationError::Field {
            field: "iops".to_string(),
            message: "IOPS must be a whole number".to_string(),
        });
    }
    if iops < min as f64 || iops > max as f64 {
        return Err(ValidationError::ConstraintViolation(format!(
            "IOPS must be between {min} and {max} (got {iops})"
        )));
    }
    let ceiling = size_gb * max_per_gb as f64;
    if iops > ceiling {
        return Err(ValidationError::ConstraintViolation(format!(
            "IOPS cannot exceed {max_per_gb} per GB of disk ({ceiling} for {size_gb} GB)"
        )));
    }
    Ok(())
}
