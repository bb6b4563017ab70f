use serde::{Deserialize, Serialize};
use crate::enums::step::Step;

/// One line of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditAction {
    EnableTracking,
    DisableTracking,
    ToggleTracking,
    Insert { pos: usize, text: String },
    Delete { from: usize, to: usize },
    Replace { from: usize, to: usize, text: String },
    Format { from: usize, to: usize, mark: String },
    /// Several steps dispatched as one transaction.
    Transaction { steps: Vec<Step> },
    /// `change` is either a change id or `#n`, the n-th change created by
    /// the script (zero based).
    Accept { change: String },
    Reject { change: String },
    AcceptAll,
    RejectAll,
    Activate { position: usize },
}

impl EditAction {
    pub fn name(&self) -> &'static str {
        match self {
            EditAction::EnableTracking => "enable_tracking",
            EditAction::DisableTracking => "disable_tracking",
            EditAction::ToggleTracking => "toggle_tracking",
            EditAction::Insert { .. } => "insert",
            EditAction::Delete { .. } => "delete",
            EditAction::Replace { .. } => "replace",
            EditAction::Format { .. } => "format",
            EditAction::Transaction { .. } => "transaction",
            EditAction::Accept { .. } => "accept",
            EditAction::Reject { .. } => "reject",
            EditAction::AcceptAll => "accept_all",
            EditAction::RejectAll => "reject_all",
            EditAction::Activate { .. } => "activate",
        }
    }
}
