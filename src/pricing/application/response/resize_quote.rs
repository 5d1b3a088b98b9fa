use crate::core::domain::model::{branch_status::BranchStatusClass, resize_delta::ResizeDelta};
use crate::pricing::application::service::currency::format_currency;
use serde::Serialize;

/// Outcome of a resize cost preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum ResizeQuote {
    /// The resize was priced.
    Priced(ResizeDelta),
    /// The branch's status does not allow a resize right now.
    NotActionable(BranchStatusClass),
    /// Pricing failed; the message describes why.
    Unavailable(String),
}

impl ResizeQuote {
    pub fn delta(&self) -> Option<&ResizeDelta> {
        match self {
            ResizeQuote::Priced(delta) => Some(delta),
            _ => None,
        }
    }

    /// The formatted monthly total, or `None` when there is nothing to show.
    pub fn formatted_total(&self) -> Option<String> {
        self.delta().map(|d| format_currency(d.total))
    }
}
