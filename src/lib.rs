//! Tracked changes for collaborative manuscript editing.
//!
//! Edits flow through [`services::track_changes::TrackChangesSession`]:
//! each transaction is classified into change records, decorated in the
//! overlay and kept anchored as the document changes, until a reviewer
//! accepts or rejects it.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;

pub use errors::{TrackError, TrackResult};
pub use services::track_changes::TrackChangesSession;
pub use structs::document::Document;
pub use structs::transaction::Transaction;
