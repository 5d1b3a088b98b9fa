//! Loading price tables from JSON configuration.

use crate::core::domain::{
    error::{QuotaError, QuotaResult, ValidationError},
    model::price_table::PriceTable,
};
use rust_decimal::Decimal;
use std::{fs, path::Path};
use tracing::debug;

impl PriceTable {
    /// Parses a price table from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `QuotaError::Configuration` if the document is not a valid
    /// table, and `QuotaError::Validation` if it carries negative prices or
    /// allowances or an empty version.
    pub fn from_json_str(json: &str) -> QuotaResult<Self> {
        let table: PriceTable = serde_json::from_str(json)
            .map_err(|e| QuotaError::Configuration(format!("Invalid price table: {e}")))?;
        validate_price_table(&table)?;
        debug!(version = %table.version, classes = table.storage.len(), "loaded price table");
        Ok(table)
    }

    /// Reads and parses a price table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `QuotaError::Configuration` if the file cannot be read, plus
    /// everything [`PriceTable::from_json_str`] can return.
    pub fn from_path(path: impl AsRef<Path>) -> QuotaResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            QuotaError::Configuration(format!(
                "Cannot read price table {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&contents)
    }
}

/// Validates that a table is usable for pricing.
pub(crate) fn validate_price_table(table: &PriceTable) -> Result<(), ValidationError> {
    if table.version.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "version".to_string(),
            message: "Price table version cannot be empty".to_string(),
        });
    }
    for (storage_type, pricing) in &table.storage {
        let amounts = [
            ("per_gb", Some(pricing.per_gb)),
            ("per_iops", Some(pricing.per_iops)),
            ("per_throughput_mbps", pricing.per_throughput_mbps),
            ("included_iops", Some(pricing.included_iops)),
            ("included_throughput_mbps", Some(pricing.included_throughput_mbps)),
        ];
        for (field, amount) in amounts {
            if amount.is_some_and(|a| a < Decimal::ZERO) {
                return Err(ValidationError::ConstraintViolation(format!(
                    "{storage_type}.{field} cannot be negative"
                )));
            }
        }
    }
    Ok(())
}
