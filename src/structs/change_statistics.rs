use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::enums::change_kind::ChangeKind;
use crate::enums::change_status::ChangeStatus;
use crate::structs::change_record::ChangeRecord;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChangeStatistics {
    // Totals
    pub total_count: usize,
    pub pending_count: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,

    // Pending by kind
    pub insert_count: usize,
    pub delete_count: usize,
    pub replace_count: usize,
    pub format_count: usize,

    // Characters still awaiting review
    pub pending_chars_inserted: usize,
    pub pending_chars_deleted: usize,

    pub changes_by_author: HashMap<String, usize>, // author_name -> pending count
    pub most_active_author: Option<(String, usize)>,
}

impl ChangeStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(pending: &[ChangeRecord], history: &[ChangeRecord]) -> Self {
        let mut stats = Self::new();

        for record in pending {
            stats.pending_count += 1;
            match record.kind {
                ChangeKind::Insert => {
                    stats.insert_count += 1;
                    stats.pending_chars_inserted += record.content.chars().count();
                }
                ChangeKind::Delete => {
                    stats.delete_count += 1;
                    stats.pending_chars_deleted += record.content.chars().count();
                }
                ChangeKind::Replace => {
                    stats.replace_count += 1;
                    stats.pending_chars_inserted += record.content.chars().count();
                    stats.pending_chars_deleted += record.prior_content.as_deref().map_or(0, |p| p.chars().count());
                }
                ChangeKind::Format => stats.format_count += 1,
            }
            *stats.changes_by_author.entry(record.author_name.clone()).or_insert(0) += 1;
        }

        for record in history {
            match record.status {
                ChangeStatus::Accepted => stats.accepted_count += 1,
                ChangeStatus::Rejected => stats.rejected_count += 1,
                ChangeStatus::Pending => {}
            }
        }

        stats.total_count = stats.pending_count + stats.accepted_count + stats.rejected_count;
        stats.most_active_author = stats
            .changes_by_author
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, count)| (name.clone(), *count));

        stats
    }

    pub fn resolved_count(&self) -> usize {
        self.accepted_count + self.rejected_count
    }

    pub fn review_progress(&self) -> u32 {
        if self.total_count == 0 {
            return 100;
        }
        (self.resolved_count() * 100 / self.total_count) as u32
    }

    pub fn print_summary(&self) {
        println!("\n📊 Tracked Changes Summary");
        println!("═══════════════════════════════════════");

        println!("📈 Overview:");
        println!("   Total Changes: {}", self.total_count);
        println!("   Pending: {}", self.pending_count);
        println!("   Accepted: {} ✅", self.accepted_count);
        println!("   Rejected: {} ↩️", self.rejected_count);
        println!("   Review Progress: {}%", self.review_progress());

        if self.pending_count > 0 {
            println!("\n📝 Pending By Kind:");
            println!("   Insertions: {} ➕", self.insert_count);
            println!("   Deletions: {} ➖", self.delete_count);
            println!("   Replacements: {} 🔁", self.replace_count);
            if self.format_count > 0 {
                println!("   Formatting: {} 🎨", self.format_count);
            }
            println!("   Characters: +{} / -{}", self.pending_chars_inserted, self.pending_chars_deleted);
        }

        if let Some((author, count)) = &self.most_active_author {
            println!("\n👤 Most active author: {} ({} pending)", author, count);
        }

        println!("═══════════════════════════════════════\n");
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
