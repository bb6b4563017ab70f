use crate::enums::assoc::Assoc;
use crate::enums::change_kind::ChangeKind;
use crate::structs::author::Author;
use crate::structs::change_record::ChangeRecord;
use crate::structs::decoration::Decoration;
use crate::structs::transaction::{AppliedStep, Transaction};

/// A classified step: the record for the registry and its decoration in
/// post-transaction coordinates.
#[derive(Debug, Clone)]
pub struct ClassifiedChange {
    pub record: ChangeRecord,
    pub decoration: Decoration,
}

pub struct ChangeClassifier;

impl ChangeClassifier {

    /// Classifies every step of the transaction in step order. Transactions
    /// tagged as untracked yield nothing.
    pub fn classify(transaction: &Transaction, author: &Author) -> Vec<ClassifiedChange> {
        if !transaction.is_tracked() {
            log::debug!("⏭️ Skipping untracked transaction");
            return Vec::new();
        }

        transaction
            .steps()
            .iter()
            .enumerate()
            .filter_map(|(index, applied)| Self::classify_step(transaction, index, applied, author))
            .collect()
    }

    fn classify_step(
        transaction: &Transaction,
        index: usize,
        applied: &AppliedStep,
        author: &Author,
    ) -> Option<ClassifiedChange> {
        let (from, to) = applied.step.range();

        let (Some(old_content), Some(new_content)) = (applied.removed.as_deref(), applied.inserted()) else {
            log::debug!("⏭️ Step {} carries no text change, skipped", index);
            return None;
        };

        let kind = match (old_content.is_empty(), new_content.is_empty()) {
            (true, true) => return None,
            (false, true) => ChangeKind::Delete,
            (true, false) => ChangeKind::Insert,
            (false, false) if old_content == new_content => {
                log::debug!("⏭️ Step {} rewrote identical text, skipped", index);
                return None;
            }
            (false, false) => ChangeKind::Replace,
        };

        // Later steps of the same transaction still move this step's output.
        let tail = transaction.mapping().slice(index + 1);

        let (record, display_range) = match kind {
            ChangeKind::Delete => {
                let anchor = tail.map(from, Assoc::Before);
                let record = ChangeRecord::new(kind, old_content, None, (from, to), author);
                (record, (anchor, anchor))
            }
            _ => {
                let length = new_content.chars().count();
                let span = tail.map_range(from, from + length);
                let prior = (kind == ChangeKind::Replace).then_some(old_content);
                let record = ChangeRecord::new(kind, new_content, prior, span, author);
                (record, span)
            }
        };

        log::debug!("📝 Step {} classified as {} ({})", index, record.kind, record.id);

        let decoration = Decoration::new(&record.id, display_range, kind.visual_class(), record.sequence);
        Some(ClassifiedChange { record, decoration })
    }
}
