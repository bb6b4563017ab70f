use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_SERVER_PORT_RANGE_END, DEFAULT_SERVER_PORT_RANGE_START, DEFAULT_USER_NAME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_tracking_enabled() -> bool {
        false
    }

    pub fn default_user_name() -> String {
        DEFAULT_USER_NAME.to_string()
    }

    pub fn default_bind_address() -> String {
        DEFAULT_BIND_ADDRESS.to_string()
    }

    pub fn default_port_range_start() -> u16 {
        DEFAULT_SERVER_PORT_RANGE_START
    }

    pub fn default_port_range_end() -> u16 {
        DEFAULT_SERVER_PORT_RANGE_END
    }
}
