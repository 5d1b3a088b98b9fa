//! Disk configurations as entered in the resize form, and the
//! provisioning limits of each storage class.

use crate::core::domain::{
    error::{PricingError, ValidationError},
    value_object::{validate_disk_size, validate_iops, validate_throughput},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A storage class with its own unit prices and free allowances.
///
/// The set is closed: an unrecognized name is rejected rather than
/// defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StorageType {
    /// General purpose SSD; IOPS and throughput billed above a free baseline.
    Gp3,
    /// Provisioned IOPS SSD; every IOPS billed, throughput bundled.
    Io2,
}

impl StorageType {
    pub const ALL: [StorageType; 2] = [StorageType::Gp3, StorageType::Io2];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Gp3 => "gp3",
            StorageType::Io2 => "io2",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gp3" => Ok(StorageType::Gp3),
            "io2" => Ok(StorageType::Io2),
            _ => Err(PricingError::UnknownStorageType(s.to_string())),
        }
    }
}

impl TryFrom<String> for StorageType {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A disk as currently provisioned or as proposed.
///
/// Fields hold raw form values; the pricing calculator converts them to
/// validated value objects and rejects NaN or negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskConfiguration {
    #[serde(alias = "size_gb", alias = "sizeGB")]
    pub size_gb: f64,
    #[serde(alias = "type", alias = "storage_type")]
    pub storage_type: StorageType,
    pub iops: f64,
    #[serde(alias = "throughput", alias = "throughput_mbps", alias = "throughputMBps")]
    pub throughput_mbps: f64,
}

impl DiskConfiguration {
    pub fn new(size_gb: f64, storage_type: StorageType, iops: f64, throughput_mbps: f64) -> Self {
        Self {
            size_gb,
            storage_type,
            iops,
            throughput_mbps,
        }
    }
}

/// Provisioning bounds for one storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskLimits {
    pub min_size_gb: u64,
    pub max_size_gb: u64,
    pub min_iops: u64,
    pub max_iops: u64,
    /// Upper bound on IOPS per GB of disk.
    pub max_iops_per_gb: u64,
    /// `None` when throughput is not configurable for the class.
    pub throughput: Option<ThroughputLimits>,
}

/// Throughput bounds for classes that expose throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThroughputLimits {
    pub min_mbps: u64,
    pub max_mbps: u64,
    /// IOPS required for each MB/s of throughput.
    pub iops_per_mbps: u64,
}

impl DiskLimits {
    pub fn for_storage_type(storage_type: StorageType) -> Self {
        match storage_type {
            StorageType::Gp3 => Self {
                min_size_gb: 1,
                max_size_gb: 60_000,
                min_iops: 3_000,
                max_iops: 16_000,
                max_iops_per_gb: 500,
                throughput: Some(ThroughputLimits {
                    min_mbps: 125,
                    max_mbps: 1_000,
                    iops_per_mbps: 4,
                }),
            },
            StorageType::Io2 => Self {
                min_size_gb: 1,
                max_size_gb: 60_000,
                min_iops: 100,
                max_iops: 256_000,
                max_iops_per_gb: 1_000,
                throughput: None,
            },
        }
    }
}

/// Checks a proposed disk against its storage class limits.
///
/// Returns the first violation found: size, then IOPS, then throughput.
/// Throughput is ignored for classes where it is not configurable.
pub fn validate_disk_configuration(disk: &DiskConfiguration) -> Result<(), ValidationError> {
    let limits = DiskLimits::for_storage_type(disk.storage_type);
    validate_disk_size(disk.size_gb, limits.min_size_gb, limits.max_size_gb)?;
    validate_iops(
        disk.iops,
        limits.min_iops,
        limits.max_iops,
        disk.size_gb,
        limits.max_iops_per_gb,
    )?;
    if let Some(tp) = limits.throughput {
        validate_throughput(
            disk.throughput_mbps,
            tp.min_mbps,
            tp.max_mbps,
            disk.iops,
            tp.iops_per_mbps,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_storage_type_parse() {
        assert_eq!("gp3".parse::<StorageType>().unwrap(), StorageType::Gp3);
        assert_eq!(" IO2 ".parse::<StorageType>().unwrap(), StorageType::Io2);
        assert_eq!(
            "st1".parse::<StorageType>(),
            Err(PricingError::UnknownStorageType("st1".to_string()))
        );
    }

    #[test]
    fn test_unknown_storage_type_fails_deserialization() {
        let result: Result<DiskConfiguration, _> = serde_json::from_value(json!({
            "sizeGb": 100, "type": "magnetic", "iops": 3000, "throughput": 125
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_disk_configuration_deserializes_aliases() {
        let disk: DiskConfiguration = serde_json::from_value(json!({
            "size_gb": 100, "type": "gp3", "iops": 3000, "throughput_mbps": 125
        }))
        .unwrap();
        assert_eq!(disk, DiskConfiguration::new(100.0, StorageType::Gp3, 3000.0, 125.0));
    }

    #[test]
    fn test_validate_gp3() {
        let ok = DiskConfiguration::new(100.0, StorageType::Gp3, 3000.0, 125.0);
        assert!(validate_disk_configuration(&ok).is_ok());

        let too_fast = DiskConfiguration::new(100.0, StorageType::Gp3, 3000.0, 800.0);
        assert!(matches!(
            validate_disk_configuration(&too_fast),
            Err(ValidationError::ConstraintViolation(_))
        ));

        let too_small = DiskConfiguration::new(4.0, StorageType::Gp3, 3000.0, 125.0);
        assert!(validate_disk_configuration(&too_small).is_err());
    }

    #[test]
    fn test_validate_io2_ignores_throughput() {
        let disk = DiskConfiguration::new(100.0, StorageType::Io2, 50_000.0, 0.0);
        assert!(validate_disk_configuration(&disk).is_ok());

        let over_ratio = DiskConfiguration::new(10.0, StorageType::Io2, 20_000.0, 0.0);
        assert!(validate_disk_configuration(&over_ratio).is_err());
    }
}
