//! Resource row normalization.
//!
//! Limit records and usage snapshots arrive from several endpoints that
//! disagree on field names. Each kind definition carries an ordered alias
//! list; the first alias that resolves wins, for limits and usage alike.

use super::unit_converter::to_display_unit;
use crate::core::domain::model::{
    resource_kind::ResourceKindDef,
    resource_limit::{LimitScope, ResourceLimit},
    resource_row::{Ceiling, ResourceRow, percent_used},
    resource_usage::ResourceUsage,
};
use tracing::{debug, trace};

/// Label shown in place of a ceiling for unlimited resources.
pub const UNLIMITED: &str = "unlimited";

/// Normalizes limits and usage against the aggregate (`max_total`) ceiling.
///
/// See [`normalize_scoped`].
pub fn normalize(
    limits: Option<&[ResourceLimit]>,
    usage: Option<&ResourceUsage>,
    defs: &[ResourceKindDef],
) -> Vec<ResourceRow> {
    normalize_scoped(limits, usage, defs, LimitScope::Total)
}

/// Produces one row per kind in `defs` order, for the ceiling in `scope`.
///
/// A kind with neither a limit record nor a usage value is dropped. A kind
/// with a limit record but no usage is shown as zero used.
pub fn normalize_scoped(
    limits: Option<&[ResourceLimit]>,
    usage: Option<&ResourceUsage>,
    defs: &[ResourceKindDef],
    scope: LimitScope,
) -> Vec<ResourceRow> {
    let limits = limits.unwrap_or_default();
    defs.iter()
        .filter_map(|def| {
            let ceiling = find_ceiling(limits, def, scope);
            let used = usage.and_then(|u| u.first_of(&def.aliases)).map(|(alias, value)| {
                if def.aliases.first().map(String::as_str) != Some(alias) {
                    debug!(kind = ?def.kind, alias, "usage resolved through fallback alias");
                }
                value
            });
            build_row(def, used, ceiling)
        })
        .collect()
}

fn find_ceiling(limits: &[ResourceLimit], def: &ResourceKindDef, scope: LimitScope) -> Ceiling {
    for (position, alias) in def.aliases.iter().enumerate() {
        if let Some(limit) = limits.iter().find(|l| &l.resource == alias) {
            if position > 0 {
                debug!(kind = ?def.kind, alias = %alias, "limit resolved through fallback alias");
            }
            return match limit.ceiling(scope) {
                Some(max) if max.is_finite() => Ceiling::Bounded(max),
                Some(_) => {
                    debug!(kind = ?def.kind, "dropping non-finite ceiling");
                    Ceiling::Unlimited
                }
                None => Ceiling::Unlimited,
            };
        }
    }
    Ceiling::Unknown
}

fn build_row(def: &ResourceKindDef, used: Option<f64>, ceiling: Ceiling) -> Option<ResourceRow> {
    if used.is_none() && ceiling == Ceiling::Unknown {
        return None;
    }
    let used_raw = used.filter(|u| u.is_finite()).unwrap_or(0.0);
    let percent = ceiling.raw().and_then(|max| percent_used(used_raw, max));
    let max_display = match ceiling {
        Ceiling::Bounded(max) => to_display_unit(Some(max), def.kind),
        Ceiling::Unlimited => UNLIMITED.to_string(),
        Ceiling::Unknown => to_display_unit(None, def.kind),
    };
    let row = ResourceRow {
        resource: def.kind,
        used_raw,
        ceiling,
        used_display: to_display_unit(Some(used_raw), def.kind),
        max_display,
        percent,
    };
    trace!(kind = ?row.resource, percent = ?row.percent, "normalized resource row");
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::model::resource_kind::ResourceKind;
    use pretty_assertions::assert_eq;

    fn defs() -> Vec<ResourceKindDef> {
        ResourceKindDef::defaults()
    }

    #[test]
    fn test_no_inputs_no_rows() {
        assert!(normalize(None, None, &defs()).is_empty());
        assert!(normalize(Some(&[]), Some(&ResourceUsage::new()), &defs()).is_empty());
    }

    #[test]
    fn test_limit_without_usage_shows_zero_used() {
        let limits = [ResourceLimit::new("cpu", Some(2000.0), None)];
        let rows = normalize(Some(&limits), None, &defs());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].resource, ResourceKind::Compute);
        assert_eq!(rows[0].used_raw, 0.0);
        assert_eq!(rows[0].used_display, "0.00 vCPU");
        assert_eq!(rows[0].max_display, "2.00 vCPU");
        assert_eq!(rows[0].percent, Some(0.0));
    }

    #[test]
    fn test_usage_without_limit_has_no_percent() {
        let usage = ResourceUsage::new().with("storage_size", 3e9);
        let rows = normalize(None, Some(&usage), &defs());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].resource, ResourceKind::ObjectStorage);
        assert_eq!(rows[0].ceiling, Ceiling::Unknown);
        assert_eq!(rows[0].max_display, "—");
        assert_eq!(rows[0].percent, None);
    }

    #[test]
    fn test_zero_ceiling_is_not_usable() {
        let limits = [ResourceLimit::new("iops", Some(0.0), None)];
        let usage = ResourceUsage::new().with("iops", 500.0);
        let rows = normalize(Some(&limits), Some(&usage), &defs());
        assert_eq!(rows[0].ceiling, Ceiling::Bounded(0.0));
        assert_eq!(rows[0].percent, None);
    }

    #[test]
    fn test_order_follows_definitions() {
        let limits = [
            ResourceLimit::new("iops", Some(3000.0), None),
            ResourceLimit::new("ram", Some(1e9), None),
            ResourceLimit::new("cpu", Some(1000.0), None),
        ];
        let kinds: Vec<_> = normalize(Some(&limits), None, &defs())
            .into_iter()
            .map(|r| r.resource)
            .collect();
        assert_eq!(
            kinds,
            vec![ResourceKind::Compute, ResourceKind::Memory, ResourceKind::Iops]
        );
    }

    #[test]
    fn test_per_branch_scope() {
        let limits = [ResourceLimit::new("ram", Some(8e9), Some(2e9))];
        let usage = ResourceUsage::new().with("ram", 1e9);
        let rows = normalize_scoped(Some(&limits), Some(&usage), &defs(), LimitScope::PerBranch);
        assert_eq!(rows[0].percent, Some(50.0));
    }

    #[test]
    fn test_fallback_alias_for_usage_and_limit() {
        let limits = [ResourceLimit::new("nvme_bytes", Some(10e9), None)];
        let usage = ResourceUsage::new().with("nvme_bytes", 2.5e9);
        let rows = normalize(Some(&limits), Some(&usage), &defs());
        assert_eq!(rows[0].resource, ResourceKind::DatabaseStorage);
        assert_eq!(rows[0].percent, Some(25.0));
        assert_eq!(rows[0].used_display, "2.50 GB");
    }

    #[test]
    fn test_custom_definitions_restrict_kinds() {
        let only_memory = [ResourceKindDef::new(ResourceKind::Memory, ["memory_bytes"])];
        let limits = [
            ResourceLimit::new("memory_bytes", Some(4e9), None),
            ResourceLimit::new("ram", Some(8e9), None),
            ResourceLimit::new("cpu", Some(1000.0), None),
        ];
        let rows = normalize(Some(&limits), None, &only_memory);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].max_raw(), Some(4e9));
    }
}
