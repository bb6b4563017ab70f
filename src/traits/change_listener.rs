use crate::structs::change_record::ChangeRecord;

/// Host notifications fired by a tracking session. Every method defaults to
/// a no-op so hosts only implement what they react to.
pub trait ChangeListener: Send {
    fn on_change_created(&mut self, _record: &ChangeRecord) {}

    fn on_change_accepted(&mut self, _record: &ChangeRecord) {}

    fn on_change_rejected(&mut self, _record: &ChangeRecord) {}

    /// A decorated change was activated (e.g. clicked) in the document.
    fn on_change_activated(&mut self, _change_id: &str, _record: &ChangeRecord) {}
}

/// Listener that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl ChangeListener for NoopListener {}
