use std::sync::{Arc, Mutex, MutexGuard};
use crate::enums::tracking_event::TrackingEvent;
use crate::structs::change_record::ChangeRecord;
use crate::traits::change_listener::ChangeListener;

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<TrackingEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<TrackingEvent> {
        self.lock().clone()
    }

    pub fn drain(&self) -> Vec<TrackingEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn push(&self, event: TrackingEvent) {
        log::debug!("📨 {} for {}", event.name(), event.change_id());
        self.lock().push(event);
    }

    // A poisoned buffer still holds valid events.
    fn lock(&self) -> MutexGuard<'_, Vec<TrackingEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ChangeListener for EventLog {
    fn on_change_created(&mut self, record: &ChangeRecord) {
        self.push(TrackingEvent::ChangeCreated { record: record.clone() });
    }

    fn on_change_accepted(&mut self, record: &ChangeRecord) {
        self.push(TrackingEvent::ChangeAccepted { record: record.clone() });
    }

    fn on_change_rejected(&mut self, record: &ChangeRecord) {
        self.push(TrackingEvent::ChangeRejected { record: record.clone() });
    }

    fn on_change_activated(&mut self, change_id: &str, record: &ChangeRecord) {
        self.push(TrackingEvent::ChangeActivated {
            change_id: change_id.to_string(),
            record: record.clone(),
        });
    }
}
