use crate::structs::change_record::ChangeRecord;
use crate::traits::change_listener::ChangeListener;

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl ChangeListener for LoggingListener {
    fn on_change_created(&mut self, record: &ChangeRecord) {
        log::info!("🆕 {} [{}]", record.summary(), record.id);
    }

    fn on_change_accepted(&mut self, record: &ChangeRecord) {
        log::info!("✅ Accepted: {}", record.summary());
    }

    fn on_change_rejected(&mut self, record: &ChangeRecord) {
        log::info!("↩️ Rejected: {}", record.summary());
    }

    fn on_change_activated(&mut self, change_id: &str, record: &ChangeRecord) {
        log::info!("👆 Activated {}: {}", change_id, record.summary());
    }
}
