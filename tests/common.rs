use tracked_changes::structs::config::tracking_config::TrackingConfig;
use tracked_changes::{Document, TrackChangesSession};

pub fn tracked_session(text: &str) -> TrackChangesSession {
    TrackChangesSession::new(Document::new(text), &TrackingConfig::for_user(Some("u-1"), "Ada").enabled(true))
}

pub fn untracked_session(text: &str) -> TrackChangesSession {
    TrackChangesSession::new(Document::new(text), &TrackingConfig::for_user(Some("u-1"), "Ada"))
}
