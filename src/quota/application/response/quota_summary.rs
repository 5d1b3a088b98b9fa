use crate::core::domain::model::resource_row::ResourceRow;
use serde::Serialize;

/// What a compact quota badge should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryState {
    /// At least one resource has a usable ceiling.
    Constrained,
    /// Rows exist but none has a usable ceiling.
    Unlimited,
    /// Nothing to show.
    NoData,
    /// The branch is stopped or errored, so its usage is not live.
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSummary {
    pub state: SummaryState,
    pub most_constrained: Option<ResourceRow>,
    pub label: String,
}
