//! Monthly cost differences produced by the resize calculator.

use crate::core::domain::error::{PricingError, PricingResult};
use rust_decimal::Decimal;
use serde::Serialize;

/// Monthly price of one dimension before and after a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    pub old_price: Decimal,
    pub new_price: Decimal,
}

impl PriceComparison {
    pub fn new(old_price: Decimal, new_price: Decimal) -> Self {
        Self {
            old_price,
            new_price,
        }
    }

    /// `new_price - old_price`; negative for a credit. `None` if the
    /// difference leaves the decimal range.
    pub fn delta(&self) -> Option<Decimal> {
        self.new_price.checked_sub(self.old_price)
    }
}

/// Signed monthly cost change of a resize, per dimension and in total.
///
/// `total` is always the exact sum of the three components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeDelta {
    pub disk_size_cost: Decimal,
    pub iops_cost: Decimal,
    pub throughput_cost: Decimal,
    pub total: Decimal,
}

impl ResizeDelta {
    pub fn from_comparisons(
        disk_size: PriceComparison,
        iops: PriceComparison,
        throughput: PriceComparison,
    ) -> PricingResult<Self> {
        let disk_size_cost = disk_size.delta().ok_or_else(|| overflow("disk_size"))?;
        let iops_cost = iops.delta().ok_or_else(|| overflow("iops"))?;
        let throughput_cost = throughput.delta().ok_or_else(|| overflow("throughput"))?;
        let total = disk_size_cost
            .checked_add(iops_cost)
            .and_then(|sum| sum.checked_add(throughput_cost))
            .ok_or_else(|| overflow("total"))?;
        Ok(Self {
            disk_size_cost,
            iops_cost,
            throughput_cost,
            total,
        })
    }

    pub fn is_credit(&self) -> bool {
        self.total < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.disk_size_cost.is_zero() && self.iops_cost.is_zero() && self.throughput_cost.is_zero()
    }
}

fn overflow(field: &str) -> PricingError {
    PricingError::Overflow(field.to_string())
}
