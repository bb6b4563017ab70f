use std::collections::BTreeMap;
use crate::enums::visual_class::VisualClass;
use crate::services::track_changes::TrackChangesSession;

/// Text views of a tracking session for terminals and logs.
pub struct ChangeLogger {}

impl ChangeLogger {

    /// Renders the document with inline review markers: `[+inserted+]`,
    /// `[-deleted-]` at deletion anchors and `[~old→new~]` for replacements.
    pub fn render_document(session: &TrackChangesSession) -> String {
        let text: Vec<char> = session.document().text().chars().collect();

        let mut opens: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut closes: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut anchors: BTreeMap<usize, Vec<String>> = BTreeMap::new();

        for decoration in session.decorations() {
            let Some(record) = session.change(&decoration.change_id) else {
                continue;
            };
            let prior = record.prior_content.as_deref().unwrap_or_default();
            let (from, to) = decoration.range();

            match decoration.visual_class {
                VisualClass::Deletion => {
                    anchors.entry(from).or_default().push(format!("[-{}-]", record.content));
                }
                VisualClass::Insertion if from < to => {
                    opens.entry(from).or_default().push("[+".to_string());
                    closes.entry(to).or_default().push("+]".to_string());
                }
                VisualClass::Replacement if from < to => {
                    opens.entry(from).or_default().push(format!("[~{}→", prior));
                    closes.entry(to).or_default().push("~]".to_string());
                }
                VisualClass::Replacement => {
                    anchors.entry(from).or_default().push(format!("[~{}→~]", prior));
                }
                VisualClass::Formatting if from < to => {
                    opens.entry(from).or_default().push("[*".to_string());
                    closes.entry(to).or_default().push("*]".to_string());
                }
                // Collapsed insertions have nothing left to show.
                VisualClass::Insertion | VisualClass::Formatting => {}
            }
        }

        let mut rendered = String::with_capacity(text.len() * 2);
        for pos in 0..=text.len() {
            if let Some(markers) = closes.get(&pos) {
                markers.iter().rev().for_each(|marker| rendered.push_str(marker));
            }
            if let Some(markers) = anchors.get(&pos) {
                markers.iter().for_each(|marker| rendered.push_str(marker));
            }
            if let Some(markers) = opens.get(&pos) {
                markers.iter().for_each(|marker| rendered.push_str(marker));
            }
            if let Some(c) = text.get(pos) {
                rendered.push(*c);
            }
        }
        rendered
    }

    pub fn print_change_report(session: &TrackChangesSession) {
        let pending = session.pending_changes();

        println!("\n📝 Tracked changes ({} pending)", pending.len());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{}", Self::render_document(session));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        for (i, record) in pending.iter().enumerate() {
            let (from, to) = session.live_range(&record.id).unwrap_or(record.range);
            println!(
                "{:>3}. [{}] {} @ {}..{} ({})",
                i + 1,
                record.kind.label(),
                record.summary(),
                from,
                to,
                record.kind.visual_class().css_class()
            );
            println!("     🆔 {} | 🕒 {}", record.id, record.created_at.format("%Y-%m-%d %H:%M:%S"));
        }

        if pending.is_empty() {
            println!("✨ No pending changes");
        }
    }
}
