use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_USER_NAME};
use crate::errors::{TrackError, TrackResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn load() -> TrackResult<Config> {
        let path = Self::config_path();
        if path.exists() {
            return Self::load_from(&path);
        }

        log::debug!("📋 No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> TrackResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| TrackError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn sample_config() -> &'static str {
        r#"# Tracked changes configuration

[tracking]
# Whether tracking is on when a session starts
enabled = false

# Identity recorded on every tracked change
# user_id = "u-123"
user_name = "Anonymous"

[server]
# Review API bind address and the port range probed at startup
bind_address = "127.0.0.1"
port_range_start = 8080
port_range_end = 8200
"#
    }

    pub fn create_sample_config() -> TrackResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> TrackResult<()> {
        if path.exists() {
            return Err(TrackError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", path.display())),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::sample_config())?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        if config.tracking.user_name.trim().is_empty() {
            result.error("tracking.user_name", "must not be empty");
        } else if config.tracking.user_name == DEFAULT_USER_NAME {
            result.warn(
                "tracking.user_name",
                format!("is '{}'; changes will not name a reviewer", DEFAULT_USER_NAME),
            );
        }

        if let Some(user_id) = &config.tracking.user_id {
            if user_id.trim().is_empty() {
                result.error("tracking.user_id", "must be omitted or non-empty");
            }
        }

        if config.server.port_range_start > config.server.port_range_end {
            result.error(
                "server.port_range_start",
                format!(
                    "{} is greater than server.port_range_end ({})",
                    config.server.port_range_start, config.server.port_range_end
                ),
            );
        }

        if config.server.bind_address.parse::<IpAddr>().is_err() {
            result.error(
                "server.bind_address",
                format!("'{}' is not an IP address", config.server.bind_address),
            );
        }

        result
    }
}
