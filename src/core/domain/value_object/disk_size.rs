use crate::core::domain::error::{PricingResult, ValidationError};
use rust_decimal::Decimal;

/// A validated disk size in decimal gigabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskSizeGb(Decimal);

impl DiskSizeGb {
    /// Builds a disk size from raw form state, rejecting NaN and negatives.
    pub fn from_raw(size_gb: f64) -> PricingResult<Self> {
        super::non_negative_decimal("size_gb", size_gb).map(Self)
    }

    /// Returns the size in gigabytes.
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }
}

/// Validates a disk size against the provisionable range.
pub(crate) fn validate_disk_size(size_gb: f64, min_gb: u64, max_gb: u64) -> Result<(), ValidationError> {
    if !size_gb.is_finite() {
        return Err(ValidationError::Field {
            field: "size_gb".to_string(),
            message: "Disk size must be a number".to_string(),
        });
    }
    if size_gb.fract() != 0.0 {
        return Err(ValidationError::Format(format!(
            "Disk size must be a whole number of GB (got {size_gb})"
        )));
    }
    if size_gb < min_gb as f64 || size_gb > max_gb as f64 {
        return Err(ValidationError::ConstraintViolation(format!(
            "Disk size must be between {min_gb} and {max_gb} GB (got {size_gb})"
        )));
    }
    Ok(())
}
