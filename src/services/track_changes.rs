use crate::enums::change_status::ChangeStatus;
use crate::errors::TrackResult;
use crate::services::change_classifier::ChangeClassifier;
use crate::services::change_registry::ChangeRegistry;
use crate::services::decoration_overlay::DecorationOverlay;
use crate::services::resolution_engine::ResolutionEngine;
use crate::structs::author::Author;
use crate::structs::change_record::ChangeRecord;
use crate::structs::change_statistics::ChangeStatistics;
use crate::structs::config::tracking_config::TrackingConfig;
use crate::structs::decoration::Decoration;
use crate::structs::document::Document;
use crate::structs::transaction::Transaction;
use crate::traits::change_listener::{ChangeListener, NoopListener};

/// One document open for editing with change tracking.
///
/// The session is the single writer of the document, the change registry and
/// the decoration overlay. Every mutation goes through [`dispatch`] or one of
/// the resolution commands and completes synchronously, so the registry and
/// overlay always agree on which changes are pending.
///
/// [`dispatch`]: TrackChangesSession::dispatch
pub struct TrackChangesSession {
    document: Document,
    tracking: bool,
    author: Author,
    registry: ChangeRegistry,
    overlay: DecorationOverlay,
    listener: Box<dyn ChangeListener>,
}

impl TrackChangesSession {
    pub fn new(document: Document, config: &TrackingConfig) -> Self {
        Self {
            document,
            tracking: config.enabled,
            author: config.author(),
            registry: ChangeRegistry::new(),
            overlay: DecorationOverlay::new(),
            listener: Box::new(NoopListener),
        }
    }

    pub fn with_listener(mut self, listener: Box<dyn ChangeListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn transaction(&self) -> Transaction {
        Transaction::new(&self.document)
    }

    /// Applies a transaction, classifies it when tracking is on, and keeps
    /// the overlay anchored. Returns the records created.
    pub fn dispatch(&mut self, transaction: Transaction) -> TrackResult<Vec<ChangeRecord>> {
        transaction.ensure_based_on(&self.document)?;

        let classified = if self.tracking {
            ChangeClassifier::classify(&transaction, &self.author)
        } else {
            Vec::new()
        };

        self.overlay.remap(&transaction);
        self.document = transaction.into_doc();

        let mut created = Vec::with_capacity(classified.len());
        for change in classified {
            self.registry.insert(change.record.clone());
            self.overlay.add(change.decoration);
            self.listener.on_change_created(&change.record);
            created.push(change.record);
        }

        Ok(created)
    }

    pub fn insert_text(&mut self, pos: usize, text: &str) -> TrackResult<Vec<ChangeRecord>> {
        let mut transaction = self.transaction();
        transaction.insert(pos, text)?;
        self.dispatch(transaction)
    }

    pub fn delete_range(&mut self, from: usize, to: usize) -> TrackResult<Vec<ChangeRecord>> {
        let mut transaction = self.transaction();
        transaction.delete(from, to)?;
        self.dispatch(transaction)
    }

    pub fn replace_range(&mut self, from: usize, to: usize, text: &str) -> TrackResult<Vec<ChangeRecord>> {
        let mut transaction = self.transaction();
        transaction.replace(from, to, text)?;
        self.dispatch(transaction)
    }

    pub fn format_range(&mut self, from: usize, to: usize, mark: &str) -> TrackResult<Vec<ChangeRecord>> {
        let mut transaction = self.transaction();
        transaction.format(from, to, mark)?;
        self.dispatch(transaction)
    }

    pub fn toggle_tracking(&mut self) -> bool {
        self.tracking = !self.tracking;
        log::info!("🔀 Change tracking {}", if self.tracking { "enabled" } else { "disabled" });
        true
    }

    pub fn enable_tracking(&mut self) -> bool {
        self.tracking = true;
        true
    }

    pub fn disable_tracking(&mut self) -> bool {
        self.tracking = false;
        true
    }

    /// Keeps the edit and drops the bookkeeping. `false` when the id is not
    /// pending.
    pub fn accept_change(&mut self, change_id: &str) -> bool {
        match ResolutionEngine::finalize(&mut self.registry, &mut self.overlay, change_id, ChangeStatus::Accepted) {
            Some(record) => {
                log::info!("✅ Change accepted: {}", record.id);
                self.listener.on_change_accepted(&record);
                true
            }
            None => {
                log::warn!("⚠️ Cannot accept {}: no pending change with that id", change_id);
                false
            }
        }
    }

    /// Undoes the edit with an untracked inverse transaction, then drops the
    /// bookkeeping. `false` when the id is not pending.
    pub fn reject_change(&mut self, change_id: &str) -> bool {
        let plan = match ResolutionEngine::plan_rejection(&self.document, &self.registry, &self.overlay, change_id) {
            Some(Ok(plan)) => plan,
            Some(Err(e)) => {
                log::error!("❌ Cannot build inverse edit for {}: {}", change_id, e);
                return false;
            }
            None => {
                log::warn!("⚠️ Cannot reject {}: no pending change with that id", change_id);
                return false;
            }
        };

        if let Some(inverse) = plan.inverse {
            if let Err(e) = self.dispatch(inverse) {
                log::error!("❌ Inverse edit for {} failed: {}", change_id, e);
                return false;
            }
        }

        match ResolutionEngine::finalize(&mut self.registry, &mut self.overlay, change_id, ChangeStatus::Rejected) {
            Some(record) => {
                log::info!("↩️ Change rejected: {} ({})", record.id, plan.record.kind);
                self.listener.on_change_rejected(&record);
                true
            }
            None => false,
        }
    }

    pub fn accept_all_changes(&mut self) -> usize {
        let ids = self.registry.pending_ids();
        let resolved = ids.iter().filter(|id| self.accept_change(id)).count();
        log::info!("✅ Accepted {} of {} pending changes", resolved, ids.len());
        resolved
    }

    /// Rejects every change pending at call time, newest first. Returns how
    /// many were resolved.
    pub fn reject_all_changes(&mut self) -> usize {
        let ids = ResolutionEngine::rejection_order(&self.registry);
        let resolved = ids.iter().filter(|id| self.reject_change(id)).count();
        log::info!("↩️ Rejected {} of {} pending changes", resolved, ids.len());
        resolved
    }

    /// Resolves a document position to the change decorated there and
    /// notifies the listener.
    pub fn activate_at(&mut self, pos: usize) -> Option<ChangeRecord> {
        let change_id = self.overlay.at(pos)?.change_id.clone();
        let record = self.registry.get(&change_id)?.clone();
        self.listener.on_change_activated(&change_id, &record);
        Some(record)
    }

    pub fn pending_changes(&self) -> Vec<ChangeRecord> {
        self.registry.pending()
    }

    pub fn change(&self, change_id: &str) -> Option<&ChangeRecord> {
        self.registry.find(change_id)
    }

    pub fn history(&self) -> &[ChangeRecord] {
        self.registry.history()
    }

    pub fn live_range(&self, change_id: &str) -> Option<(usize, usize)> {
        self.overlay.get(change_id).map(|decoration| decoration.range())
    }

    pub fn decorations(&self) -> Vec<Decoration> {
        self.overlay.sorted()
    }

    pub fn statistics(&self) -> ChangeStatistics {
        ChangeStatistics::from_records(&self.registry.pending(), self.registry.history())
    }

    /// Decorated ids and pending ids are the same set.
    pub fn is_consistent(&self) -> bool {
        let pending: std::collections::HashSet<String> = self.registry.pending_ids().into_iter().collect();
        pending == self.overlay.ids()
    }
}
