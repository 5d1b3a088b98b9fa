use thiserror::Error;

/// The main error type for quota and pricing operations.
///
/// This enum represents all possible errors that can surface from the
/// crate, including price-table configuration, input validation and
/// resize pricing failures.
#[derive(Error, Debug)]
pub enum QuotaError {
    /// A price table file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A disk configuration, price table or kind list was rejected.
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },

    /// A resize could not be priced.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

impl From<ValidationError> for QuotaError {
    fn from(error: ValidationError) -> Self {
        QuotaError::Validation { source: error }
    }
}

/// Why a disk configuration, price table or builder input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A named input such as `sizeGB` or a price entry is out of range.
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// The value is not a usable number, e.g. a fractional disk size.
    #[error("Format error: {0}")]
    Format(String),

    /// The value breaks a provisioning rule, such as IOPS above the
    /// storage class's per-GB ratio.
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Errors raised by the disk resize pricing calculator.
///
/// These indicate a programming or configuration defect rather than a
/// user-input problem: the computation that hit one is abandoned, the
/// rest of the page keeps rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The storage class name is not part of the closed price table.
    #[error("Unknown storage type '{0}'")]
    UnknownStorageType(String),

    /// The loaded price table carries no entry for this storage class.
    #[error("No price published for storage type '{storage_type}'")]
    MissingPrice { storage_type: String },

    /// A disk dimension is negative or not a finite number.
    #[error("Invalid value for '{field}': {value}")]
    InvalidDimension { field: String, value: String },

    /// A price is too large to represent.
    #[error("Price of '{0}' overflows the currency range")]
    Overflow(String),
}

/// Type alias for Results that may fail with a QuotaError
pub type QuotaResult<T> = Result<T, QuotaError>;

/// Type alias for Results of pricing computations
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts_with_source() {
        let err: QuotaError = ValidationError::Format("bad".to_string()).into();
        match err {
            QuotaError::Validation { source, .. } => {
                assert_eq!(source, ValidationError::Format("bad".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pricing_error_display() {
        let err = QuotaError::from(PricingError::UnknownStorageType("st1".to_string()));
        assert_eq!(
            err.to_string(),
            "Pricing error: Unknown storage type 'st1'"
        );
    }
}
