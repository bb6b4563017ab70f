use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::author::Author;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    #[serde(default = "ConfigHelper::default_tracking_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default = "ConfigHelper::default_user_name")]
    pub user_name: String,
}

impl TrackingConfig {
    pub fn for_user(user_id: Option<&str>, user_name: &str) -> Self {
        Self {
            enabled: ConfigHelper::default_tracking_enabled(),
            user_id: user_id.map(|s| s.to_string()),
            user_name: user_name.to_string(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn author(&self) -> Author {
        Author::new(self.user_id.as_deref(), &self.user_name)
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: ConfigHelper::default_tracking_enabled(),
            user_id: None,
            user_name: ConfigHelper::default_user_name(),
        }
    }
}
