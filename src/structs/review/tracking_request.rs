use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackingRequest {
    #[serde(default)]
    pub enabled: Option<bool>,
}
