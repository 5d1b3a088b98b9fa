use rust_decimal::Decimal;

/// Number of read replicas attached to a branch.
///
/// Each replica carries its own copy of the provisioned IOPS and
/// throughput, so billed amounts scale with `count + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplicaCount(u32);

impl ReplicaCount {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    /// Returns the replica count.
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Multiplier applied to per-instance prices: the primary plus every replica.
    #[must_use]
    pub fn multiplier(&self) -> Decimal {
        Decimal::from(self.0) + Decimal::ONE
    }
}

impl From<u32> for ReplicaCount {
    fn from(count: u32) -> Self {
        Self(count)
    }
}
