use serde::{Deserialize, Serialize};
use crate::enums::edit_action::EditAction;
use crate::enums::tracking_event::TrackingEvent;
use crate::errors::{TrackError, TrackResult};
use crate::logger::change_logger::ChangeLogger;
use crate::services::event_log::EventLog;
use crate::services::track_changes::TrackChangesSession;
use crate::structs::change_record::ChangeRecord;
use crate::structs::change_statistics::ChangeStatistics;
use crate::structs::config::tracking_config::TrackingConfig;
use crate::structs::document::Document;
use crate::structs::edit_script::EditScript;
use crate::structs::transaction::Transaction;

/// Outcome of replaying an [`EditScript`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub text: String,
    pub rendered: String,
    pub tracking: bool,
    pub pending: Vec<ChangeRecord>,
    pub statistics: ChangeStatistics,
    pub events: Vec<TrackingEvent>,
    /// Actions that resolved nothing, e.g. accepting an unknown id.
    pub skipped: Vec<String>,
}

pub struct ScriptRunner {
    session: TrackChangesSession,
    events: EventLog,
    created: Vec<String>,
    skipped: Vec<String>,
}

impl ScriptRunner {
    pub fn new(script: &EditScript, defaults: &TrackingConfig) -> Self {
        let mut config = defaults.clone();
        if let Some(name) = &script.user_name {
            config.user_name = name.clone();
            config.user_id = script.user_id.clone();
        }
        if let Some(enabled) = script.tracking {
            config.enabled = enabled;
        }

        let events = EventLog::new();
        let session = TrackChangesSession::new(Document::new(script.document.as_str()), &config)
            .with_listener(Box::new(events.clone()));

        Self {
            session,
            events,
            created: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn session(&self) -> &TrackChangesSession {
        &self.session
    }

    /// Replays every action in order. Stops at the first edit that fails to
    /// apply.
    pub fn run(&mut self, script: &EditScript) -> TrackResult<ReplayReport> {
        for (index, action) in script.actions.iter().enumerate() {
            log::debug!("▶️ [{}] {}", index, action.name());
            self.apply(action).map_err(|e| {
                log::error!("❌ Action {} ({}) failed: {}", index, action.name(), e);
                e
            })?;
        }
        Ok(self.report())
    }

    pub fn apply(&mut self, action: &EditAction) -> TrackResult<()> {
        match action {
            EditAction::EnableTracking => {
                self.session.enable_tracking();
            }
            EditAction::DisableTracking => {
                self.session.disable_tracking();
            }
            EditAction::ToggleTracking => {
                self.session.toggle_tracking();
            }
            EditAction::Insert { pos, text } => {
                let records = self.session.insert_text(*pos, text)?;
                self.remember(records);
            }
            EditAction::Delete { from, to } => {
                let records = self.session.delete_range(*from, *to)?;
                self.remember(records);
            }
            EditAction::Replace { from, to, text } => {
                let records = self.session.replace_range(*from, *to, text)?;
                self.remember(records);
            }
            EditAction::Format { from, to, mark } => {
                let records = self.session.format_range(*from, *to, mark)?;
                self.remember(records);
            }
            EditAction::Transaction { steps } => {
                let mut transaction: Transaction = self.session.transaction();
                for step in steps {
                    transaction.step(step.clone())?;
                }
                let records = self.session.dispatch(transaction)?;
                self.remember(records);
            }
            EditAction::Accept { change } => {
                let id = self.resolve_reference(change)?;
                if !self.session.accept_change(&id) {
                    self.skipped.push(format!("accept {}", change));
                }
            }
            EditAction::Reject { change } => {
                let id = self.resolve_reference(change)?;
                if !self.session.reject_change(&id) {
                    self.skipped.push(format!("reject {}", change));
                }
            }
            EditAction::AcceptAll => {
                self.session.accept_all_changes();
            }
            EditAction::RejectAll => {
                self.session.reject_all_changes();
            }
            EditAction::Activate { position } => {
                if self.session.activate_at(*position).is_none() {
                    self.skipped.push(format!("activate {}", position));
                }
            }
        }
        Ok(())
    }

    pub fn report(&self) -> ReplayReport {
        ReplayReport {
            text: self.session.document().text().to_string(),
            rendered: ChangeLogger::render_document(&self.session),
            tracking: self.session.is_tracking(),
            pending: self.session.pending_changes(),
            statistics: self.session.statistics(),
            events: self.events.snapshot(),
            skipped: self.skipped.clone(),
        }
    }

    fn remember(&mut self, records: Vec<ChangeRecord>) {
        self.created.extend(records.into_iter().map(|record| record.id));
    }

    /// `#n` names the n-th change this script created; anything else is an id.
    fn resolve_reference(&self, reference: &str) -> TrackResult<String> {
        let Some(index) = reference.strip_prefix('#') else {
            return Ok(reference.to_string());
        };
        let index: usize = index
            .parse()
            .map_err(|_| TrackError::parse_error("edit script", None, &format!("bad change reference '{}'", reference)))?;
        self.created.get(index).cloned().ok_or_else(|| {
            TrackError::parse_error(
                "edit script",
                None,
                &format!("change reference '{}' but only {} changes were created", reference, self.created.len()),
            )
        })
    }
}
