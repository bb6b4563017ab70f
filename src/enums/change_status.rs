use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ChangeStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChangeStatus::Pending)
    }

    pub fn can_transition_to(&self, next: ChangeStatus) -> bool {
        !self.is_terminal() && next.is_terminal()
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChangeStatus::Pending => write!(f, "PENDING"),
            ChangeStatus::Accepted => write!(f, "ACCEPTED"),
            ChangeStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}
