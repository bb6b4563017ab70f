pub mod api_response;
pub mod author;
pub mod change_record;
pub mod change_statistics;
pub mod cli;
pub mod config;
pub mod decoration;
pub mod document;
pub mod edit_script;
pub mod review;
pub mod step_map;
pub mod transaction;
pub mod validation_result;
