use std::sync::{Arc, Mutex};
use dashmap::DashMap;
use crate::enums::change_status::ChangeStatus;
use crate::enums::tracking_event::TrackingEvent;
use crate::errors::{TrackError, TrackResult};
use crate::helpers::id_generator::IdGenerator;
use crate::services::event_log::EventLog;
use crate::services::track_changes::TrackChangesSession;
use crate::structs::change_record::ChangeRecord;
use crate::structs::config::tracking_config::TrackingConfig;
use crate::structs::document::Document;
use crate::structs::review::create_manuscript_request::CreateManuscriptRequest;
use crate::structs::review::manuscript_snapshot::ManuscriptSnapshot;
use crate::structs::review::transaction_request::TransactionRequest;

pub struct ManuscriptSession {
    session: Mutex<TrackChangesSession>,
    events: EventLog,
}

pub struct SessionManager {
    sessions: Arc<DashMap<String, ManuscriptSession>>,
    defaults: TrackingConfig,
}

impl SessionManager {
    pub fn new(defaults: TrackingConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            defaults,
        }
    }

    pub fn create_session(&self, request: CreateManuscriptRequest) -> String {
        let session_id = IdGenerator::session_id();

        let mut config = self.defaults.clone();
        if let Some(name) = request.user_name {
            config.user_name = name;
            config.user_id = request.user_id;
        }
        if let Some(enabled) = request.tracking {
            config.enabled = enabled;
        }

        let events = EventLog::new();
        let session = TrackChangesSession::new(Document::new(request.document), &config)
            .with_listener(Box::new(events.clone()));

        self.sessions.insert(session_id.clone(), ManuscriptSession {
            session: Mutex::new(session),
            events,
        });

        log::info!("📄 Manuscript session {} opened for {}", session_id, config.user_name);
        session_id
    }

    pub fn close_session(&self, session_id: &str) -> TrackResult<ManuscriptSnapshot> {
        let (_, manuscript) = self
            .sessions
            .remove(session_id)
            .ok_or_else(|| TrackError::session_not_found(session_id))?;
        let session = manuscript
            .session
            .into_inner()
            .map_err(|_| TrackError::system_error("session lock", "manuscript session lock poisoned"))?;

        log::info!(
            "📕 Manuscript session {} closed with {} pending change(s)",
            session_id,
            session.pending_changes().len()
        );
        Ok(ManuscriptSnapshot::capture(session_id, &session))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn snapshot(&self, session_id: &str) -> TrackResult<ManuscriptSnapshot> {
        self.with_session(session_id, |session| ManuscriptSnapshot::capture(session_id, session))
    }

    pub fn apply_transaction(&self, session_id: &str, request: TransactionRequest) -> TrackResult<Vec<ChangeRecord>> {
        self.with_session(session_id, |session| {
            let version = session.document().version();
            if let Some(base_version) = request.base_version {
                if base_version != version {
                    return Err(TrackError::StaleTransaction {
                        expected_version: version,
                        actual_version: base_version,
                    });
                }
            }

            let mut transaction = session.transaction();
            for step in request.steps {
                transaction.step(step)?;
            }
            session.dispatch(transaction)
        })?
    }

    pub fn set_tracking(&self, session_id: &str, enabled: Option<bool>) -> TrackResult<bool> {
        self.with_session(session_id, |session| {
            match enabled {
                Some(true) => session.enable_tracking(),
                Some(false) => session.disable_tracking(),
                None => session.toggle_tracking(),
            };
            session.is_tracking()
        })
    }

    pub fn pending_changes(&self, session_id: &str) -> TrackResult<Vec<ChangeRecord>> {
        self.with_session(session_id, |session| session.pending_changes())
    }

    pub fn resolve_change(&self, session_id: &str, change_id: &str, status: ChangeStatus) -> TrackResult<bool> {
        self.with_session(session_id, |session| match status {
            ChangeStatus::Accepted => Ok(session.accept_change(change_id)),
            ChangeStatus::Rejected => Ok(session.reject_change(change_id)),
            ChangeStatus::Pending => {
                let from = session
                    .change(change_id)
                    .map(|record| record.status.to_string())
                    .unwrap_or_else(|| "UNKNOWN".to_string());
                Err(TrackError::invalid_transition(change_id, &from, &ChangeStatus::Pending.to_string()))
            }
        })?
    }

    pub fn accept_all(&self, session_id: &str) -> TrackResult<usize> {
        self.with_session(session_id, |session| session.accept_all_changes())
    }

    pub fn reject_all(&self, session_id: &str) -> TrackResult<usize> {
        self.with_session(session_id, |session| session.reject_all_changes())
    }

    pub fn activate(&self, session_id: &str, position: usize) -> TrackResult<Option<ChangeRecord>> {
        self.with_session(session_id, |session| session.activate_at(position))
    }

    pub fn take_events(&self, session_id: &str) -> TrackResult<Vec<TrackingEvent>> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.events.drain())
            .ok_or_else(|| TrackError::session_not_found(session_id))
    }

    fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&mut TrackChangesSession) -> R) -> TrackResult<R> {
        let entry = self
            .sessions
            .get(session_id)
            .ok_or_else(|| TrackError::session_not_found(session_id))?;
        let mut session = entry
            .session
            .lock()
            .map_err(|_| TrackError::system_error("session lock", "manuscript session lock poisoned"))?;
        Ok(f(&mut session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::step::Step;

    fn manager() -> SessionManager {
        SessionManager::new(TrackingConfig::for_user(Some("u-1"), "Ada").enabled(true))
    }

    #[test]
    fn unknown_session_is_reported() {
        let err = manager().snapshot("missing").unwrap_err();
        assert!(matches!(err, TrackError::SessionNotFound { .. }));
    }

    #[test]
    fn stale_base_version_is_refused() {
        let manager = manager();
        let id = manager.create_session(CreateManuscriptRequest { document: "abc".into(), ..Default::default() });
        let request = TransactionRequest {
            steps: vec![Step::Replace { from: 0, to: 0, text: "x".into() }],
            base_version: Some(7),
        };

        let err = manager.apply_transaction(&id, request).unwrap_err();
        assert!(matches!(err, TrackError::StaleTransaction { expected_version: 0, actual_version: 7 }));
        assert_eq!(manager.snapshot(&id).unwrap().text, "abc");
    }

    #[test]
    fn pending_is_not_a_valid_target_status() {
        let manager = manager();
        let id = manager.create_session(CreateManuscriptRequest { document: "abc".into(), ..Default::default() });
        let records = manager
            .apply_transaction(&id, TransactionRequest {
                steps: vec![Step::Replace { from: 3, to: 3, text: "d".into() }],
                base_version: None,
            })
            .unwrap();

        let err = manager.resolve_change(&id, &records[0].id, ChangeStatus::Pending).unwrap_err();
        assert!(matches!(err, TrackError::InvalidStatusTransition { .. }));
        assert!(manager.resolve_change(&id, &records[0].id, ChangeStatus::Accepted).unwrap());
        assert!(!manager.resolve_change(&id, &records[0].id, ChangeStatus::Rejected).unwrap());
    }

    #[test]
    fn events_are_handed_out_once() {
        let manager = manager();
        let id = manager.create_session(CreateManuscriptRequest { document: "abc".into(), ..Default::default() });
        for _ in 0..3 {
            manager
                .apply_transaction(&id, TransactionRequest {
                    steps: vec![Step::Replace { from: 0, to: 0, text: "x".into() }],
                    base_version: None,
                })
                .unwrap();
            assert_eq!(manager.take_events(&id).unwrap().len(), 1);
        }

        assert_eq!(manager.accept_all(&id).unwrap(), 3);
        assert_eq!(manager.take_events(&id).unwrap().len(), 3);
        assert!(manager.take_events(&id).unwrap().is_empty());
    }

    #[test]
    fn closing_discards_the_session() {
        let manager = manager();
        let id = manager.create_session(CreateManuscriptRequest { document: "abc".into(), ..Default::default() });
        manager
            .apply_transaction(&id, TransactionRequest {
                steps: vec![Step::Replace { from: 1, to: 2, text: "".into() }],
                base_version: None,
            })
            .unwrap();

        let last = manager.close_session(&id).unwrap();
        assert_eq!(last.text, "ac");
        assert_eq!(last.pending.len(), 1);
        assert_eq!(manager.session_count(), 0);
        assert!(matches!(manager.close_session(&id), Err(TrackError::SessionNotFound { .. })));
        assert!(matches!(manager.take_events(&id), Err(TrackError::SessionNotFound { .. })));
    }
}
