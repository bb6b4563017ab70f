pub mod activate_request;
pub mod create_manuscript_request;
pub mod manuscript_snapshot;
pub mod resolve_change_request;
pub mod tracking_request;
pub mod transaction_request;
