use crate::core::domain::error::{PricingResult, ValidationError};
use rust_decimal::Decimal;

/// A validated throughput figure in MB/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThroughputMbps(Decimal);

impl ThroughputMbps {
    /// Builds a throughput value from raw form state, rejecting NaN and negatives.
    pub fn from_raw(mbps: f64) -> PricingResult<Self> {
        super::non_negative_decimal("throughput_mbps", mbps).map(Self)
    }

    /// Throughput above the free allowance, never negative.
    #[must_use]
    pub fn billable(&self, included: Decimal) -> Decimal {
        (self.0 - included).max(Decimal::ZERO)
    }

    /// Returns the throughput in MB/s.
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }
}

/// Validates throughput against a storage class range and the
/// throughput-per-IOPS ratio.
pub(crate) fn validate_throughput(
    mbps: f64,
    min: u64,
    max: u64,
    iops: f64,
    iops_per_mbps: u64,
) -> Result<(), ValidationError> {
    if !mbps.is_finite() || mbps.fract() != 0.0 {
        return Err(ValidationError::Field {
            field: "throughput_mbps".to_string(),
            message: "Throughput must be a whole number of MB/s".to_string(),
        });
    }
    if mbps < min as f64 || mbps > max as f64 {
        return Err(ValidationError::ConstraintViolation(format!(
            "Throughput must be between {min} and {max} MB/s (got {mbps})"
        )));
    }
    if iops_per_mbps > 0 && mbps > iops / iops_per_mbps as f64 {
        return Err(ValidationError::ConstraintViolation(format!(
            "Throughput requires at least {iops_per_mbps} IOPS per MB/s"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_throughput_valid() {
        assert!(validate_throughput(125.0, 125, 1000, 3000.0, 4).is_ok());
        assert!(validate_throughput(1000.0, 125, 1000, 4000.0, 4).is_ok());
    }

    #[test]
    fn test_validate_throughput_invalid() {
        assert!(validate_throughput(124.0, 125, 1000, 3000.0, 4).is_err());
        assert!(validate_throughput(1001.0, 125, 1000, 16_000.0, 4).is_err());
        // 3000 IOPS allow at most 750 MB/s
        assert!(validate_throughput(751.0, 125, 1000, 3000.0, 4).is_err());
    }

    #[test]
    fn test_billable_throughput() {
        let tp = ThroughputMbps::from_raw(200.0).unwrap();
        assert_eq!(tp.billable(dec!(125)), dec!(75));
        assert_eq!(tp.billable(dec!(250)), Decimal::ZERO);
    }
}
