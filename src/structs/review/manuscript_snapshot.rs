use serde::{Deserialize, Serialize};
use crate::logger::change_logger::ChangeLogger;
use crate::services::track_changes::TrackChangesSession;
use crate::structs::change_record::ChangeRecord;
use crate::structs::decoration::Decoration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManuscriptSnapshot {
    pub id: String,
    pub text: String,
    pub version: u64,
    pub tracking: bool,
    pub author_name: String,
    pub rendered: String,
    pub pending: Vec<ChangeRecord>,
    pub decorations: Vec<Decoration>,
}

impl ManuscriptSnapshot {
    pub fn capture(id: &str, session: &TrackChangesSession) -> Self {
        Self {
            id: id.to_string(),
            text: session.document().text().to_string(),
            version: session.document().version(),
            tracking: session.is_tracking(),
            author_name: session.author().name.clone(),
            rendered: ChangeLogger::render_document(session),
            pending: session.pending_changes(),
            decorations: session.decorations(),
        }
    }
}
