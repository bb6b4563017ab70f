use crate::enums::change_kind::ChangeKind;
use crate::enums::change_status::ChangeStatus;
use crate::errors::TrackResult;
use crate::services::change_registry::ChangeRegistry;
use crate::services::decoration_overlay::DecorationOverlay;
use crate::structs::change_record::ChangeRecord;
use crate::structs::document::Document;
use crate::structs::transaction::Transaction;

/// What rejecting a change requires: the record and, for content changes,
/// the untracked inverse transaction to dispatch.
#[derive(Debug)]
pub struct RejectionPlan {
    pub record: ChangeRecord,
    pub inverse: Option<Transaction>,
}

pub struct ResolutionEngine;

impl ResolutionEngine {

    /// Builds the inverse edit for a pending change from its live decoration.
    /// Returns `None` when the change is not pending.
    pub fn plan_rejection(
        document: &Document,
        registry: &ChangeRegistry,
        overlay: &DecorationOverlay,
        change_id: &str,
    ) -> Option<TrackResult<RejectionPlan>> {
        let record = registry.get(change_id)?.clone();
        let live_range = overlay.get(change_id).map(|d| d.range()).unwrap_or(record.range);

        Some(Self::inverse_transaction(document, &record, live_range).map(|inverse| RejectionPlan { record, inverse }))
    }

    pub fn inverse_transaction(
        document: &Document,
        record: &ChangeRecord,
        live_range: (usize, usize),
    ) -> TrackResult<Option<Transaction>> {
        let (from, to) = live_range;
        let mut transaction = Transaction::new(document);

        match record.kind {
            ChangeKind::Delete => {
                transaction.insert(from, &record.content)?;
            }
            ChangeKind::Insert => {
                if from == to {
                    return Ok(None);
                }
                transaction.delete(from, to)?;
            }
            ChangeKind::Replace => {
                let prior = record.prior_content.as_deref().unwrap_or_default();
                transaction.replace(from, to, prior)?;
            }
            // Formatting restoration is not modeled; rejecting only drops bookkeeping.
            ChangeKind::Format => return Ok(None),
        }

        Ok(Some(transaction.without_tracking()))
    }

    /// Terminal bookkeeping shared by accept and reject: registry status and
    /// decoration removal happen together.
    pub fn finalize(
        registry: &mut ChangeRegistry,
        overlay: &mut DecorationOverlay,
        change_id: &str,
        status: ChangeStatus,
    ) -> Option<ChangeRecord> {
        let record = registry.resolve(change_id, status)?;
        overlay.remove(change_id);
        Some(record)
    }

    /// Pending ids ordered for bulk rejection: newest first, so each inverse
    /// edit lands on the document state its change produced.
    pub fn rejection_order(registry: &ChangeRegistry) -> Vec<String> {
        let mut ids = registry.pending_ids();
        ids.reverse();
        ids
    }
}
