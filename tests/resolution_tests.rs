use tracked_changes::enums::change_kind::ChangeKind;
use tracked_changes::enums::change_status::ChangeStatus;
use crate::common::tracked_session;

#[test]
fn accepting_twice_reports_failure_the_second_time() {
    let mut session = tracked_session("abc");
    let id = session.insert_text(3, "d").unwrap()[0].id.clone();

    assert!(session.accept_change(&id));
    assert!(!session.accept_change(&id));
    assert!(!session.reject_change(&id));

    assert_eq!(session.document().text(), "abcd");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.change(&id).unwrap().status, ChangeStatus::Accepted);
}

#[test]
fn rejecting_twice_applies_the_inverse_once() {
    let mut session = tracked_session("abc");
    let id = session.delete_range(0, 1).unwrap()[0].id.clone();

    assert!(session.reject_change(&id));
    assert!(!session.reject_change(&id));

    assert_eq!(session.document().text(), "abc");
    assert_eq!(session.history().len(), 1);
}

#[test]
fn unknown_id_is_a_silent_failure() {
    let mut session = tracked_session("abc");
    session.insert_text(0, "x").unwrap();

    assert!(!session.accept_change("change-0-0-missing"));
    assert!(!session.reject_change("change-0-0-missing"));
    assert_eq!(session.document().text(), "xabc");
    assert_eq!(session.pending_changes().len(), 1);
}

#[test]
fn rejecting_with_tracking_on_creates_no_new_change() {
    let mut session = tracked_session("hello world");
    let ids: Vec<String> = [
        session.insert_text(11, "!").unwrap(),
        session.delete_range(0, 6).unwrap(),
        session.replace_range(0, 5, "earth").unwrap(),
    ]
    .into_iter()
    .flatten()
    .map(|record| record.id)
    .collect();

    for id in ids.iter().rev() {
        assert!(session.reject_change(id));
        assert!(session.is_consistent());
    }

    assert!(session.is_tracking());
    assert!(session.pending_changes().is_empty());
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.document().text(), "hello world");
}

#[test]
fn accept_all_resolves_everything_without_touching_text() {
    let mut session = tracked_session("abc def ghi");
    session.delete_range(8, 11).unwrap();
    session.replace_range(4, 7, "DEF").unwrap();
    session.insert_text(0, "> ").unwrap();
    let text = session.document().text().to_string();

    assert_eq!(session.accept_all_changes(), 3);

    assert_eq!(session.document().text(), text);
    assert!(session.pending_changes().is_empty());
    assert!(session.decorations().is_empty());
    assert!(session.history().iter().all(|r| r.status == ChangeStatus::Accepted));
    assert_eq!(session.accept_all_changes(), 0);
}

#[test]
fn reject_all_restores_non_overlapping_changes() {
    let mut session = tracked_session("abc def ghi");
    session.delete_range(8, 11).unwrap();
    session.replace_range(4, 7, "DEF").unwrap();
    session.insert_text(0, "> ").unwrap();
    assert_eq!(session.document().text(), "> abc DEF ");

    assert_eq!(session.reject_all_changes(), 3);

    assert_eq!(session.document().text(), "abc def ghi");
    assert!(session.pending_changes().is_empty());
    assert!(session.history().iter().all(|r| r.status == ChangeStatus::Rejected));
}

#[test]
fn rejecting_an_insertion_after_surrounding_text_moved() {
    let mut session = tracked_session("ac");
    let id = session.insert_text(1, "b").unwrap()[0].id.clone();
    session.disable_tracking();
    session.insert_text(0, "__").unwrap();
    session.insert_text(5, "__").unwrap();

    assert_eq!(session.document().text(), "__abc__");
    assert!(session.reject_change(&id));
    assert_eq!(session.document().text(), "__ac__");
}

#[test]
fn format_changes_are_not_tracked_and_keep_text() {
    let mut session = tracked_session("bold move");
    let records = session.format_range(0, 4, "strong").unwrap();

    assert!(records.is_empty());
    assert_eq!(session.document().marks().len(), 1);
    assert!(session.pending_changes().iter().all(|r| r.kind != ChangeKind::Format));
}

#[test]
fn statistics_follow_resolution() {
    let mut session = tracked_session("abc");
    let first = session.insert_text(3, "def").unwrap()[0].id.clone();
    session.delete_range(0, 1).unwrap();

    let stats = session.statistics();
    assert_eq!(stats.pending_count, 2);
    assert_eq!(stats.pending_chars_inserted, 3);
    assert_eq!(stats.pending_chars_deleted, 1);

    session.accept_change(&first);
    let stats = session.statistics();
    assert_eq!(stats.pending_count, 1);
    assert_eq!(stats.accepted_count, 1);
    assert_eq!(stats.total_count, 2);
}
