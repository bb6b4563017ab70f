use serde::{Deserialize, Serialize};
use crate::enums::change_status::ChangeStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveChangeRequest {
    pub status: ChangeStatus,
}
