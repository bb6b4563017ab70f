pub mod config;
pub mod server_config;
pub mod tracking_config;
