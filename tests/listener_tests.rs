use mockall::mock;
use tracked_changes::enums::change_kind::ChangeKind;
use tracked_changes::enums::change_status::ChangeStatus;
use tracked_changes::enums::tracking_event::TrackingEvent;
use tracked_changes::services::event_log::EventLog;
use tracked_changes::structs::change_record::ChangeRecord;
use tracked_changes::traits::change_listener::ChangeListener;
use crate::common::tracked_session;

mock! {
    pub Listener {}

    impl ChangeListener for Listener {
        fn on_change_created(&mut self, record: &ChangeRecord);
        fn on_change_accepted(&mut self, record: &ChangeRecord);
        fn on_change_rejected(&mut self, record: &ChangeRecord);
        fn on_change_activated(&mut self, change_id: &str, record: &ChangeRecord);
    }
}

#[test]
fn created_and_accepted_fire_once_each() {
    let mut listener = MockListener::new();
    listener
        .expect_on_change_created()
        .withf(|record: &ChangeRecord| record.kind == ChangeKind::Insert && record.content == "hello")
        .times(1)
        .return_const(());
    listener
        .expect_on_change_accepted()
        .withf(|record: &ChangeRecord| record.status == ChangeStatus::Accepted)
        .times(1)
        .return_const(());
    listener.expect_on_change_rejected().never();
    listener.expect_on_change_activated().never();

    let mut session = tracked_session("").with_listener(Box::new(listener));
    let id = session.insert_text(0, "hello").unwrap()[0].id.clone();

    assert!(session.accept_change(&id));
    assert!(!session.accept_change(&id));
}

#[test]
fn reject_notifies_without_creating_a_change() {
    let mut listener = MockListener::new();
    listener.expect_on_change_created().times(1).return_const(());
    listener
        .expect_on_change_rejected()
        .withf(|record: &ChangeRecord| record.status == ChangeStatus::Rejected && record.content == "cat")
        .times(1)
        .return_const(());
    listener.expect_on_change_accepted().never();
    listener.expect_on_change_activated().never();

    let mut session = tracked_session("cat").with_listener(Box::new(listener));
    let id = session.delete_range(0, 3).unwrap()[0].id.clone();

    assert!(session.reject_change(&id));
    assert!(!session.reject_change(&id));
    assert_eq!(session.document().text(), "cat");
}

#[test]
fn activation_carries_the_change_id() {
    let mut session = tracked_session("ab");
    let id = session.insert_text(1, "xyz").unwrap()[0].id.clone();

    let expected = id.clone();
    let mut listener = MockListener::new();
    listener
        .expect_on_change_activated()
        .withf(move |change_id: &str, _record: &ChangeRecord| change_id == expected)
        .times(1)
        .return_const(());
    let mut session = session.with_listener(Box::new(listener));

    assert_eq!(session.activate_at(2).map(|r| r.id), Some(id));
    assert!(session.activate_at(0).is_none());
}

#[test]
fn event_log_records_the_session_history() {
    let events = EventLog::new();
    let mut session = tracked_session("one two").with_listener(Box::new(events.clone()));

    session.insert_text(7, " three").unwrap();
    session.delete_range(0, 4).unwrap();
    session.activate_at(3);
    session.reject_all_changes();

    let names: Vec<&str> = events.snapshot().iter().map(TrackingEvent::name).collect();
    assert_eq!(
        names,
        vec!["change_created", "change_created", "change_activated", "change_rejected", "change_rejected"]
    );
    assert_eq!(session.document().text(), "one two");

    let json = serde_json::to_value(&events.drain()[0]).unwrap();
    assert_eq!(json["event"], "change_created");
    assert_eq!(json["record"]["kind"], "insert");
    assert_eq!(json["record"]["status"], "PENDING");
}
