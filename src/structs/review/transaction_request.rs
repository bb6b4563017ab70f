use serde::{Deserialize, Serialize};
use crate::enums::step::Step;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub steps: Vec<Step>,
    #[serde(default)]
    pub base_version: Option<u64>,
}
