//! Versioned unit prices per storage class.

use super::disk_configuration::StorageType;
use crate::core::domain::error::{PricingError, PricingResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Monthly unit prices and free allowances for one storage class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoragePricing {
    /// Price per GB of provisioned disk.
    pub per_gb: Decimal,
    /// Price per provisioned IOPS above `included_iops`.
    pub per_iops: Decimal,
    /// Price per MB/s above `included_throughput_mbps`; `None` when
    /// throughput is bundled into the size price.
    #[serde(default)]
    pub per_throughput_mbps: Option<Decimal>,
    #[serde(default)]
    pub included_iops: Decimal,
    #[serde(default)]
    pub included_throughput_mbps: Decimal,
}

/// Source of storage prices.
///
/// The calculator only ever reads prices through this trait, so tests
/// and alternative tables can be swapped in.
#[cfg_attr(test, mockall::automock)]
pub trait PriceCatalog {
    /// Identifier of the published table the prices come from.
    fn version(&self) -> String;

    /// Prices for `storage_type`, or [`PricingError::MissingPrice`] when
    /// the table does not cover it.
    fn pricing(&self, storage_type: StorageType) -> PricingResult<StoragePricing>;
}

/// A complete price table as published or loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceTable {
    pub version: String,
    pub storage: BTreeMap<StorageType, StoragePricing>,
}

impl PriceTable {
    pub const PUBLISHED_VERSION: &'static str = "2024-08";

    /// The built-in published table.
    pub fn published() -> Self {
        let storage = BTreeMap::from([
            (
                StorageType::Gp3,
                StoragePricing {
                    per_gb: dec!(0.125),
                    per_iops: dec!(0.024),
                    per_throughput_mbps: Some(dec!(0.095)),
                    included_iops: dec!(3000),
                    included_throughput_mbps: dec!(125),
                },
            ),
            (
                StorageType::Io2,
                StoragePricing {
                    per_gb: dec!(0.195),
                    per_iops: dec!(0.119),
                    per_throughput_mbps: None,
                    included_iops: Decimal::ZERO,
                    included_throughput_mbps: Decimal::ZERO,
                },
            ),
        ]);
        Self {
            version: Self::PUBLISHED_VERSION.to_string(),
            storage,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::published()
    }
}

impl PriceCatalog for PriceTable {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn pricing(&self, storage_type: StorageType) -> PricingResult<StoragePricing> {
        self.storage
            .get(&storage_type)
            .cloned()
            .ok_or_else(|| PricingError::MissingPrice {
                storage_type: storage_type.to_string(),
            })
    }
}
