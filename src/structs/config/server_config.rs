use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_bind_address")]
    pub bind_address: String,

    #[serde(default = "ConfigHelper::default_port_range_start")]
    pub port_range_start: u16,

    #[serde(default = "ConfigHelper::default_port_range_end")]
    pub port_range_end: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ConfigHelper::default_bind_address(),
            port_range_start: ConfigHelper::default_port_range_start(),
            port_range_end: ConfigHelper::default_port_range_end(),
        }
    }
}
