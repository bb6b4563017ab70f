pub mod change_logger;
pub mod logging_listener;
