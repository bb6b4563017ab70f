use std::time::Duration;

pub const DEFAULT_SERVER_PORT_RANGE_START: u16 = 8080;
pub const DEFAULT_SERVER_PORT_RANGE_END: u16 = 8200;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_USER_NAME: &str = "Anonymous";
pub const MAX_SESSION_ID_LENGTH: usize = 64;
pub const MAX_CHANGE_ID_LENGTH: usize = 96;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const CONFIG_DIR_NAME: &str = "tracked-changes";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
