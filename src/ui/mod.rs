pub mod review_server;
pub mod session_manager;
