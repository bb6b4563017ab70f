use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::change_kind::ChangeKind;
use crate::enums::change_status::ChangeStatus;
use crate::helpers::id_generator::IdGenerator;
use crate::structs::author::Author;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub id: String,
    pub kind: ChangeKind,
    pub content: String,
    pub prior_content: Option<String>,
    /// Range at classification time. Live positions come from the overlay.
    pub range: (usize, usize),
    pub author_id: Option<String>,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub status: ChangeStatus,
    /// Creation order within the process.
    pub sequence: u64,
}

impl ChangeRecord {
    pub fn new(
        kind: ChangeKind,
        content: &str,
        prior_content: Option<&str>,
        range: (usize, usize),
        author: &Author,
    ) -> Self {
        let created_at = Utc::now();
        let sequence = IdGenerator::next_sequence();

        Self {
            id: IdGenerator::change_id(created_at, sequence),
            kind,
            content: content.to_string(),
            prior_content: prior_content.map(|s| s.to_string()),
            range,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            created_at,
            status: ChangeStatus::Pending,
            sequence,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ChangeStatus::Pending
    }

    /// One-line description for sidebars and logs.
    pub fn summary(&self) -> String {
        match self.kind {
            ChangeKind::Insert => format!("{} inserted \"{}\"", self.author_name, self.content),
            ChangeKind::Delete => format!("{} deleted \"{}\"", self.author_name, self.content),
            ChangeKind::Replace => format!(
                "{} replaced \"{}\" with \"{}\"",
                self.author_name,
                self.prior_content.as_deref().unwrap_or_default(),
                self.content
            ),
            ChangeKind::Format => format!("{} formatted \"{}\"", self.author_name, self.content),
        }
    }
}
