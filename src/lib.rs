//! Resource quota accounting and disk resize pricing for a multi-tenant
//! database hosting console.
//!
//! Everything here is a pure function of its inputs: limit records and
//! usage snapshots come from the caller's data layer, disk configurations
//! from form state, and the price table from configuration.

mod core;
mod pricing;
mod quota;

#[cfg(test)]
mod tests;

pub use crate::core::domain::{
    error::{PricingError, PricingResult, QuotaError, QuotaResult, ValidationError},
    model::{
        branch_action::{BranchAction, allowed_actions, is_action_allowed},
        branch_status::{BranchStatusClass, classify, is_active, is_error, is_stopped, is_transitional},
        disk_configuration::{
            DiskConfiguration, DiskLimits, StorageType, ThroughputLimits,
            validate_disk_configuration,
        },
        price_table::{PriceCatalog, PriceTable, StoragePricing},
        quota_config::QuotaConfig,
        resize_delta::{PriceComparison, ResizeDelta},
        resource_kind::{DisplayUnit, ResourceKind, ResourceKindDef},
        resource_limit::{LimitScope, ResourceLimit},
        resource_row::{Ceiling, ResourceRow, percent_used},
        resource_usage::ResourceUsage,
    },
    value_object::{DiskSizeGb, ProvisionedIops, ReplicaCount, ThroughputMbps},
};
pub use crate::pricing::application::{
    response::resize_quote::ResizeQuote,
    service::{
        currency::{format_currency, to_cents},
        resize_pricer::ResizePricer,
    },
};
pub use crate::quota::application::{
    response::quota_summary::{QuotaSummary, SummaryState},
    service::{
        normalizer::{UNLIMITED, normalize, normalize_scoped},
        summarizer::{most_constrained, summarize},
        unit_converter::{NOT_APPLICABLE, format_display_value, to_display_unit, to_display_value},
    },
};

use std::path::PathBuf;
use tracing::debug;

/// Quota and resize pricing for one console context
///
/// Holds the configuration (limit scope, resource kinds and aliases) and
/// the price table; every method is a pure computation over the inputs it
/// is handed.
///
/// # Examples
///
/// ```
/// use branch_quota::{BranchQuota, DiskConfiguration, QuotaResult, ReplicaCount, StorageType};
///
/// fn main() -> QuotaResult<()> {
///     let quota = BranchQuota::builder().build()?;
///     let old = DiskConfiguration::new(100.0, StorageType::Gp3, 3000.0, 125.0);
///     let new = DiskConfiguration::new(200.0, StorageType::Gp3, 3000.0, 125.0);
///     let quote = quota.quote_resize(Some("ACTIVE_HEALTHY"), &old, &new, ReplicaCount::default());
///     assert_eq!(quote.formatted_total().as_deref(), Some("$12.50"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BranchQuota {
    config: QuotaConfig,
    pricer: ResizePricer<PriceTable>,
}

/// Builder for BranchQuota configuration
#[derive(Debug, Default)]
pub struct BranchQuotaBuilder {
    price_table: Option<PriceTable>,
    price_table_path: Option<PathBuf>,
    limit_scope: Option<LimitScope>,
    kinds: Option<Vec<ResourceKindDef>>,
}

impl BranchQuotaBuilder {
    /// Uses `table` instead of the published price table.
    pub fn price_table(mut self, table: PriceTable) -> Self {
        self.price_table = Some(table);
        self
    }

    /// Loads the price table from a JSON file at build time.
    ///
    /// Takes precedence over [`BranchQuotaBuilder::price_table`].
    pub fn price_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.price_table_path = Some(path.into());
        self
    }

    pub fn limit_scope(mut self, scope: LimitScope) -> Self {
        self.limit_scope = Some(scope);
        self
    }

    /// Replaces the resource kinds shown, their order, and their aliases.
    pub fn kinds(mut self, kinds: Vec<ResourceKindDef>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    /// Builds the facade.
    ///
    /// # Errors
    ///
    /// Returns `QuotaError::Configuration` if the price table file cannot
    /// be read or parsed, and `QuotaError::Validation` if a kind
    /// definition has no aliases or appears twice.
    pub fn build(self) -> QuotaResult<BranchQuota> {
        let table = match (self.price_table_path, self.price_table) {
            (Some(path), _) => PriceTable::from_path(path)?,
            (None, Some(table)) => table,
            (None, None) => PriceTable::published(),
        };

        let defaults = QuotaConfig::default();
        let kinds = self.kinds.unwrap_or(defaults.kinds);
        validate_kinds(&kinds)?;

        debug!(version = %table.version, kinds = kinds.len(), "built quota context");
        Ok(BranchQuota {
            config: QuotaConfig {
                limit_scope: self.limit_scope.unwrap_or(defaults.limit_scope),
                kinds,
            },
            pricer: ResizePricer::new(table),
        })
    }
}

fn validate_kinds(kinds: &[ResourceKindDef]) -> Result<(), ValidationError> {
    for (i, def) in kinds.iter().enumerate() {
        if def.aliases.iter().all(|a| a.trim().is_empty()) {
            return Err(ValidationError::Field {
                field: "kinds".to_string(),
                message: format!("{} has no aliases", def.kind.label()),
            });
        }
        if kinds[..i].iter().any(|other| other.kind == def.kind) {
            return Err(ValidationError::ConstraintViolation(format!(
                "{} is defined more than once",
                def.kind.label()
            )));
        }
    }
    Ok(())
}

impl BranchQuota {
    /// Creates a new builder for BranchQuota configuration
    pub fn builder() -> BranchQuotaBuilder {
        BranchQuotaBuilder::default()
    }

    pub fn config(&self) -> &QuotaConfig {
        &self.config
    }

    /// Version of the price table in use.
    pub fn price_table_version(&self) -> String {
        self.pricer.catalog().version()
    }

    pub fn pricer(&self) -> &ResizePricer<PriceTable> {
        &self.pricer
    }

    /// Normalized rows for a `(limits, usage)` pair captured together.
    pub fn resource_rows(
        &self,
        limits: Option<&[ResourceLimit]>,
        usage: Option<&ResourceUsage>,
    ) -> Vec<ResourceRow> {
        normalize_scoped(limits, usage, &self.config.kinds, self.config.limit_scope)
    }

    /// Badge summary for a `(limits, usage)` pair.
    ///
    /// `raw_status` is the branch's raw status when summarizing a branch,
    /// `None` for projects and organizations.
    pub fn quota_summary(
        &self,
        limits: Option<&[ResourceLimit]>,
        usage: Option<&ResourceUsage>,
        raw_status: Option<&str>,
    ) -> QuotaSummary {
        let rows = self.resource_rows(limits, usage);
        summarize(&rows, raw_status.map(|s| classify(Some(s))))
    }

    /// Cost preview for resizing a branch disk from `old` to `new`.
    pub fn quote_resize(
        &self,
        raw_status: Option<&str>,
        old: &DiskConfiguration,
        new: &DiskConfiguration,
        replicas: ReplicaCount,
    ) -> ResizeQuote {
        self.pricer.quote(classify(raw_status), old, new, replicas)
    }

    /// Per-dimension deltas of a resize, regardless of branch status.
    ///
    /// # Errors
    ///
    /// Returns `QuotaError::Pricing` for NaN or negative dimensions, a
    /// storage class missing from the price table, or an amount too large
    /// to represent.
    pub fn resize_delta(
        &self,
        old: &DiskConfiguration,
        new: &DiskConfiguration,
        replicas: ReplicaCount,
    ) -> QuotaResult<ResizeDelta> {
        Ok(self.pricer.calculate_resize_delta(old, new, replicas)?)
    }
}
