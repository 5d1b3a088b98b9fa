use super::{resource_kind::ResourceKindDef, resource_limit::LimitScope};

/// Settings for quota normalization.
///
/// `kinds` decides both which resources are shown and in which order;
/// each entry carries the alias list used to find it upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaConfig {
    pub limit_scope: LimitScope,
    pub kinds: Vec<ResourceKindDef>,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            limit_scope: LimitScope::Total,
            kinds: ResourceKindDef::defaults(),
        }
    }
}
