//! Incremental monthly cost of a disk resize.
//!
//! Each dimension (size, IOPS, throughput) is priced on the old and new
//! configuration independently, under each side's own storage class, and
//! rounded to cents before the deltas are taken. The total is the exact
//! sum of the rounded deltas. Proration is left to billing.

use super::currency::to_cents;
use crate::{
    core::domain::{
        error::{PricingError, PricingResult},
        model::{
            branch_action::{BranchAction, is_action_allowed},
            branch_status::BranchStatusClass,
            disk_configuration::{DiskConfiguration, StorageType},
            price_table::PriceCatalog,
            resize_delta::{PriceComparison, ResizeDelta},
        },
        value_object::{DiskSizeGb, ProvisionedIops, ReplicaCount, ThroughputMbps},
    },
    pricing::application::response::resize_quote::ResizeQuote,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Prices resizes against a [`PriceCatalog`].
#[derive(Debug, Clone)]
pub struct ResizePricer<C> {
    catalog: C,
}

impl<C: PriceCatalog> ResizePricer<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Monthly price of `size_gb` of `storage_type` disk.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` for NaN or negative sizes, `MissingPrice` when the
    /// catalog does not cover the class.
    pub fn price_disk_size(&self, size_gb: f64, storage_type: StorageType) -> PricingResult<Decimal> {
        let size = DiskSizeGb::from_raw(size_gb)?;
        let pricing = self.catalog.pricing(storage_type)?;
        checked_product("disk_size", &[size.get(), pricing.per_gb])
    }

    /// Monthly IOPS price before and after, each side under its own class.
    ///
    /// IOPS within the class allowance are free; the billable remainder is
    /// paid once for the primary and once per replica.
    pub fn price_iops(
        &self,
        old_storage_type: StorageType,
        new_storage_type: StorageType,
        old_iops: f64,
        new_iops: f64,
        replicas: ReplicaCount,
    ) -> PricingResult<PriceComparison> {
        Ok(PriceComparison::new(
            self.iops_price(old_storage_type, old_iops, replicas)?,
            self.iops_price(new_storage_type, new_iops, replicas)?,
        ))
    }

    /// Monthly throughput price before and after.
    ///
    /// Classes that bundle throughput into the size price cost nothing here.
    pub fn price_throughput(
        &self,
        old_storage_type: StorageType,
        new_storage_type: StorageType,
        old_mbps: f64,
        new_mbps: f64,
        replicas: ReplicaCount,
    ) -> PricingResult<PriceComparison> {
        Ok(PriceComparison::new(
            self.throughput_price(old_storage_type, old_mbps, replicas)?,
            self.throughput_price(new_storage_type, new_mbps, replicas)?,
        ))
    }

    pub fn calculate_disk_size_price(
        &self,
        old: &DiskConfiguration,
        new: &DiskConfiguration,
    ) -> PricingResult<PriceComparison> {
        Ok(PriceComparison::new(
            self.price_disk_size(old.size_gb, old.storage_type)?,
            self.price_disk_size(new.size_gb, new.storage_type)?,
        ))
    }

    pub fn calculate_iops_price(
        &self,
        old: &DiskConfiguration,
        new: &DiskConfiguration,
        replicas: ReplicaCount,
    ) -> PricingResult<PriceComparison> {
        self.price_iops(old.storage_type, new.storage_type, old.iops, new.iops, replicas)
    }

    pub fn calculate_throughput_price(
        &self,
        old: &DiskConfiguration,
        new: &DiskConfiguration,
        replicas: ReplicaCount,
    ) -> PricingResult<PriceComparison> {
        self.price_throughput(
            old.storage_type,
            new.storage_type,
            old.throughput_mbps,
            new.throughput_mbps,
            replicas,
        )
    }

    /// Per-dimension and total monthly deltas of resizing `old` into `new`.
    ///
    /// Negative amounts are credits and are returned as such.
    pub fn calculate_resize_delta(
        &self,
        old: &DiskConfiguration,
        new: &DiskConfiguration,
        replicas: ReplicaCount,
    ) -> PricingResult<ResizeDelta> {
        let delta = ResizeDelta::from_comparisons(
            self.calculate_disk_size_price(old, new)?,
            self.calculate_iops_price(old, new, replicas)?,
            self.calculate_throughput_price(old, new, replicas)?,
        )?;
        debug!(
            version = %self.catalog.version(),
            total = %delta.total,
            "priced disk resize"
        );
        Ok(delta)
    }

    /// A cost preview for the resize form.
    ///
    /// Branches that cannot be resized in their current status get
    /// `NotActionable`; pricing failures become `Unavailable` so the form
    /// can show a placeholder instead of an amount.
    pub fn quote(
        &self,
        status: BranchStatusClass,
        old: &DiskConfiguration,
        new: &DiskConfiguration,
        replicas: ReplicaCount,
    ) -> ResizeQuote {
        if !is_action_allowed(status, BranchAction::Resize) {
            return ResizeQuote::NotActionable(status);
        }
        match self.calculate_resize_delta(old, new, replicas) {
            Ok(delta) => ResizeQuote::Priced(delta),
            Err(err) => {
                warn!(error = %err, "disk resize could not be priced");
                ResizeQuote::Unavailable(err.to_string())
            }
        }
    }

    fn iops_price(
        &self,
        storage_type: StorageType,
        iops: f64,
        replicas: ReplicaCount,
    ) -> PricingResult<Decimal> {
        let iops = ProvisionedIops::from_raw(iops)?;
        let pricing = self.catalog.pricing(storage_type)?;
        checked_product(
            "iops",
            &[
                iops.billable(pricing.included_iops),
                pricing.per_iops,
                replicas.multiplier(),
            ],
        )
    }

    fn throughput_price(
        &self,
        storage_type: StorageType,
        mbps: f64,
        replicas: ReplicaCount,
    ) -> PricingResult<Decimal> {
        let throughput = ThroughputMbps::from_raw(mbps)?;
        let pricing = self.catalog.pricing(storage_type)?;
        let Some(per_mbps) = pricing.per_throughput_mbps else {
            return Ok(Decimal::ZERO);
        };
        checked_product(
            "throughput",
            &[
                throughput.billable(pricing.included_throughput_mbps),
                per_mbps,
                replicas.multiplier(),
            ],
        )
    }
}

/// Multiplies `factors` and rounds to cents, failing instead of panicking
/// on overflow.
fn checked_product(field: &str, factors: &[Decimal]) -> PricingResult<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, f| acc.checked_mul(*f))
        .map(to_cents)
        .ok_or_else(|| PricingError::Overflow(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::model::price_table::{MockPriceCatalog, PriceTable, StoragePricing};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn pricer() -> ResizePricer<PriceTable> {
        ResizePricer::new(PriceTable::published())
    }

    fn gp3(size: f64, iops: f64, mbps: f64) -> DiskConfiguration {
        DiskConfiguration::new(size, StorageType::Gp3, iops, mbps)
    }

    #[test]
    fn test_price_disk_size() {
        assert_eq!(pricer().price_disk_size(100.0, StorageType::Gp3).unwrap(), dec!(12.50));
        assert_eq!(pricer().price_disk_size(100.0, StorageType::Io2).unwrap(), dec!(19.50));
        assert_eq!(pricer().price_disk_size(3.0, StorageType::Gp3).unwrap(), dec!(0.38));
    }

    #[test]
    fn test_iops_allowance_and_replicas() {
        let p = pricer();
        let cmp = p
            .price_iops(StorageType::Gp3, StorageType::Gp3, 3000.0, 6000.0, ReplicaCount::new(0))
            .unwrap();
        assert_eq!(cmp, PriceComparison::new(dec!(0), dec!(72.00)));

        let cmp = p
            .price_iops(StorageType::Gp3, StorageType::Gp3, 3000.0, 6000.0, ReplicaCount::new(1))
            .unwrap();
        assert_eq!(cmp.new_price, dec!(144.00));

        let cmp = p
            .price_iops(StorageType::Gp3, StorageType::Gp3, 2000.0, 2500.0, ReplicaCount::new(3))
            .unwrap();
        assert_eq!(cmp.delta(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_storage_class_change_reprices_each_side() {
        let cmp = pricer()
            .price_iops(StorageType::Gp3, StorageType::Io2, 3000.0, 3000.0, ReplicaCount::default())
            .unwrap();
        assert_eq!(cmp.old_price, Decimal::ZERO);
        assert_eq!(cmp.new_price, dec!(357.00));
    }

    #[test]
    fn test_throughput_only_billed_for_gp3() {
        let p = pricer();
        let cmp = p
            .price_throughput(StorageType::Gp3, StorageType::Gp3, 125.0, 200.0, ReplicaCount::default())
            .unwrap();
        assert_eq!(cmp.new_price, dec!(7.13));

        let cmp = p
            .price_throughput(StorageType::Io2, StorageType::Io2, 500.0, 1000.0, ReplicaCount::new(2))
            .unwrap();
        assert_eq!(cmp, PriceComparison::new(Decimal::ZERO, Decimal::ZERO));
    }

    #[test]
    fn test_resize_delta_upsize() {
        let delta = pricer()
            .calculate_resize_delta(
                &gp3(100.0, 3000.0, 125.0),
                &gp3(200.0, 6000.0, 125.0),
                ReplicaCount::default(),
            )
            .unwrap();
        assert_eq!(
            delta,
            ResizeDelta {
                disk_size_cost: dec!(12.50),
                iops_cost: dec!(72.00),
                throughput_cost: Decimal::ZERO,
                total: dec!(84.50),
            }
        );
    }

    #[test]
    fn test_resize_delta_downsize_is_credit() {
        let delta = pricer()
            .calculate_resize_delta(
                &gp3(200.0, 6000.0, 125.0),
                &gp3(100.0, 3000.0, 125.0),
                ReplicaCount::default(),
            )
            .unwrap();
        assert_eq!(delta.total, dec!(-84.50));
        assert!(delta.is_credit());
    }

    #[test]
    fn test_resize_noop_is_zero() {
        let disk = gp3(150.0, 5000.0, 300.0);
        let delta = pricer()
            .calculate_resize_delta(&disk, &disk, ReplicaCount::new(2))
            .unwrap();
        assert!(delta.is_zero());
        assert_eq!(delta.total, Decimal::ZERO);
    }

    #[test]
    fn test_negative_and_nan_inputs_rejected() {
        let p = pricer();
        assert!(matches!(
            p.price_disk_size(-1.0, StorageType::Gp3),
            Err(PricingError::InvalidDimension { .. })
        ));
        let result = p.calculate_resize_delta(
            &gp3(100.0, 3000.0, 125.0),
            &gp3(100.0, f64::NAN, 125.0),
            ReplicaCount::default(),
        );
        assert!(matches!(
            result,
            Err(PricingError::InvalidDimension { ref field, .. }) if field == "iops"
        ));
    }

    #[test]
    fn test_io2_throughput_still_guarded() {
        let result = pricer().price_throughput(
            StorageType::Io2,
            StorageType::Io2,
            0.0,
            -5.0,
            ReplicaCount::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_price_from_catalog() {
        let mut catalog = MockPriceCatalog::new();
        catalog.expect_pricing().returning(|st| {
            Err(PricingError::MissingPrice {
                storage_type: st.to_string(),
            })
        });
        let p = ResizePricer::new(catalog);
        assert_eq!(
            p.price_disk_size(10.0, StorageType::Io2),
            Err(PricingError::MissingPrice {
                storage_type: "io2".to_string()
            })
        );
    }

    #[test]
    fn test_prices_come_from_catalog() {
        let mut catalog = MockPriceCatalog::new();
        catalog.expect_version().return_const("test".to_string());
        catalog.expect_pricing().returning(|_| {
            Ok(StoragePricing {
                per_gb: dec!(1),
                per_iops: dec!(0.01),
                per_throughput_mbps: Some(dec!(0.5)),
                included_iops: dec!(100),
                included_throughput_mbps: dec!(10),
            })
        });
        let p = ResizePricer::new(catalog);
        let delta = p
            .calculate_resize_delta(
                &gp3(10.0, 100.0, 10.0),
                &gp3(20.0, 300.0, 20.0),
                ReplicaCount::default(),
            )
            .unwrap();
        assert_eq!(delta.disk_size_cost, dec!(10));
        assert_eq!(delta.iops_cost, dec!(2.00));
        assert_eq!(delta.throughput_cost, dec!(5.0));
        assert_eq!(delta.total, dec!(17.00));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result = pricer().price_iops(
            StorageType::Io2,
            StorageType::Io2,
            0.0,
            7e28,
            ReplicaCount::new(u32::MAX),
        );
        assert_eq!(result, Err(PricingError::Overflow("iops".to_string())));
    }

    #[test]
    fn test_quote_requires_active_branch() {
        let p = pricer();
        let old = gp3(100.0, 3000.0, 125.0);
        let new = gp3(200.0, 3000.0, 125.0);
        assert_eq!(
            p.quote(BranchStatusClass::Stopped, &old, &new, ReplicaCount::default()),
            ResizeQuote::NotActionable(BranchStatusClass::Stopped)
        );
        assert!(matches!(
            p.quote(BranchStatusClass::Active, &old, &new, ReplicaCount::default()),
            ResizeQuote::Priced(d) if d.total == dec!(12.50)
        ));
        assert!(matches!(
            p.quote(BranchStatusClass::ActiveUnhealthy, &old, &gp3(-1.0, 3000.0, 125.0), ReplicaCount::default()),
            ResizeQuote::Unavailable(_)
        ));
    }
}
