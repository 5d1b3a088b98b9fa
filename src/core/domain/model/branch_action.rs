//! Which lifecycle actions a branch accepts in its current status class.

use super::branch_status::BranchStatusClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BranchAction {
    Start,
    Stop,
    Restart,
    Delete,
    Resize,
}

/// Actions enabled for a branch in `class`.
///
/// Nothing is enabled while a transition is in flight or when the status
/// is not recognized.
pub fn allowed_actions(class: BranchStatusClass) -> Vec<BranchAction> {
    if class.is_active() {
        vec![
            BranchAction::Stop,
            BranchAction::Restart,
            BranchAction::Delete,
            BranchAction::Resize,
        ]
    } else if class.is_stopped() {
        vec![BranchAction::Start, BranchAction::Delete]
    } else if class.is_error() {
        vec![BranchAction::Restart, BranchAction::Delete]
    } else {
        Vec::new()
    }
}

/// Whether `action` is enabled for a branch in `class`.
pub fn is_action_allowed(class: BranchStatusClass, action: BranchAction) -> bool {
    allowed_actions(class).contains(&action)
}
