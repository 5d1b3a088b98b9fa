//! Picks the resource closest to its ceiling for compact displays.

use crate::{
    core::domain::model::{branch_status::BranchStatusClass, resource_row::ResourceRow},
    quota::application::response::quota_summary::{QuotaSummary, SummaryState},
};

/// The row with the highest percentage used.
///
/// Rows without a usable ceiling are never selected, whatever their raw
/// usage. Ties go to the earliest row. Returns `None` when no row has a
/// percentage.
pub fn most_constrained(rows: &[ResourceRow]) -> Option<&ResourceRow> {
    rows.iter().fold(None, |best: Option<&ResourceRow>, row| {
        let Some(percent) = row.percent else {
            return best;
        };
        match best.and_then(|b| b.percent) {
            Some(best_percent) if best_percent >= percent => best,
            _ => Some(row),
        }
    })
}

/// Summarizes rows for a badge.
///
/// `status` is the branch status class when the rows belong to a branch;
/// project and organization summaries pass `None`.
pub fn summarize(rows: &[ResourceRow], status: Option<BranchStatusClass>) -> QuotaSummary {
    if status.is_some_and(|s| s.is_stopped() || s.is_error()) {
        return QuotaSummary {
            state: SummaryState::Inactive,
            most_constrained: None,
            label: "inactive".to_string(),
        };
    }
    if rows.is_empty() {
        return QuotaSummary {
            state: SummaryState::NoData,
            most_constrained: None,
            label: "no data".to_string(),
        };
    }
    match most_constrained(rows) {
        Some(row) => QuotaSummary {
            state: SummaryState::Constrained,
            label: format!(
                "{} {:.0}%",
                row.resource.label(),
                row.percent.unwrap_or_default().floor()
            ),
            most_constrained: Some(row.clone()),
        },
        None => QuotaSummary {
            state: SummaryState::Unlimited,
            most_constrained: None,
            label: "unlimited".to_string(),
        },
    }
}
