use serde::{Deserialize, Serialize};
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::tracking_config::TrackingConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub tracking: TrackingConfig,

    #[serde(default)]
    pub server: ServerConfig,
}
