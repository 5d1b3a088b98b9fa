//! Resource kinds tracked against quotas, their display units, and the
//! alias table mapping each kind to the upstream field names it has been
//! published under.

use serde::{Deserialize, Serialize};

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const GB: f64 = 1_000_000_000.0;
const MB: f64 = 1_000_000.0;

/// A kind of resource with a quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    /// Virtual CPU, raw unit milli-vCPU.
    Compute,
    /// Memory, raw unit bytes, displayed in GiB.
    Memory,
    /// Local NVMe database disk, raw unit bytes, displayed in GB.
    DatabaseStorage,
    /// Object storage, raw unit bytes, displayed in GB.
    ObjectStorage,
    /// Disk operations per second.
    Iops,
    /// Disk throughput, raw unit bytes per second, displayed in MB/s.
    Throughput,
}

/// How a raw value of a kind is turned into a display value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayUnit {
    /// Raw units per display unit.
    pub divisor: f64,
    /// Suffix appended to the formatted value.
    pub suffix: &'static str,
}

impl ResourceKind {
    /// All kinds in canonical display order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Compute,
        ResourceKind::Memory,
        ResourceKind::DatabaseStorage,
        ResourceKind::ObjectStorage,
        ResourceKind::Iops,
        ResourceKind::Throughput,
    ];

    /// The display unit for this kind.
    ///
    /// Memory is binary (GiB); storage and throughput are decimal.
    pub fn display_unit(self) -> DisplayUnit {
        match self {
            ResourceKind::Compute => DisplayUnit {
                divisor: 1000.0,
                suffix: "vCPU",
            },
            ResourceKind::Memory => DisplayUnit {
                divisor: GIB,
                suffix: "GiB",
            },
            ResourceKind::DatabaseStorage | ResourceKind::ObjectStorage => DisplayUnit {
                divisor: GB,
                suffix: "GB",
            },
            ResourceKind::Iops => DisplayUnit {
                divisor: 1.0,
                suffix: "IOPS",
            },
            ResourceKind::Throughput => DisplayUnit {
                divisor: MB,
                suffix: "MB/s",
            },
        }
    }

    /// Human label used in compact summaries.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Compute => "Compute",
            ResourceKind::Memory => "Memory",
            ResourceKind::DatabaseStorage => "Database storage",
            ResourceKind::ObjectStorage => "Object storage",
            ResourceKind::Iops => "IOPS",
            ResourceKind::Throughput => "Throughput",
        }
    }

    /// Upstream field names for this kind, highest priority first.
    pub fn default_aliases(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Compute => &["cpu", "cpu_milli", "compute"],
            ResourceKind::Memory => &["ram", "ram_bytes", "memory"],
            ResourceKind::DatabaseStorage => &["database_size", "nvme_bytes", "disk_bytes"],
            ResourceKind::ObjectStorage => &["storage_size", "object_storage_bytes", "s3_bytes"],
            ResourceKind::Iops => &["iops", "disk_iops"],
            ResourceKind::Throughput => &["throughput", "disk_throughput_bytes"],
        }
    }
}

/// A resource kind together with the ordered list of keys it may appear
/// under in limit records and usage objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceKindDef {
    pub kind: ResourceKind,
    pub aliases: Vec<String>,
}

impl ResourceKindDef {
    pub fn new<I, S>(kind: ResourceKind, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// The definition using the built-in alias list for `kind`.
    pub fn with_default_aliases(kind: ResourceKind) -> Self {
        Self::new(kind, kind.default_aliases().iter().copied())
    }

    /// Built-in definitions for every kind, in canonical order.
    pub fn defaults() -> Vec<ResourceKindDef> {
        ResourceKind::ALL
            .into_iter()
            .map(Self::with_default_aliases)
            .collect()
    }
}
