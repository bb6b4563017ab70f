//! Property tests over random edit sequences:
//!
//! 1. Registry and overlay always agree on the pending set
//! 2. Each genuine step of a transaction yields exactly one record
//! 3. Rejecting a lone insertion or deletion restores the document
//! 4. `reject_all` restores the document for non-overlapping changes

use proptest::prelude::*;
use tracked_changes::enums::step::Step;
use crate::common::tracked_session;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, String),
    Delete(usize, usize),
    Replace(usize, usize, String),
    Accept(usize),
    Reject(usize),
    Toggle,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), "[a-z]{1,4}").prop_map(|(p, t)| Op::Insert(p, t)),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Delete(a, b)),
        (any::<usize>(), any::<usize>(), "[a-z]{0,4}").prop_map(|(a, b, t)| Op::Replace(a, b, t)),
        any::<usize>().prop_map(Op::Accept),
        any::<usize>().prop_map(Op::Reject),
        Just(Op::Toggle),
    ]
}

/// A position-ordered edit on one segment of the base text.
#[derive(Debug, Clone)]
enum Piece {
    Insert(String),
    Delete(String),
    Replace(String, String),
}

fn piece_strategy() -> impl Strategy<Value = (String, Piece)> {
    let piece = prop_oneof![
        "[a-z]{1,4}".prop_map(Piece::Insert),
        "[a-z]{1,4}".prop_map(Piece::Delete),
        ("[a-z]{1,4}", "[A-Z]{1,4}").prop_map(|(old, new)| Piece::Replace(old, new)),
    ];
    ("[a-z]{1,3}", piece)
}

/// Orders a pair of raw indices into a range inside `len`.
fn range_in(a: usize, b: usize, len: usize) -> (usize, usize) {
    let (a, b) = (a % (len + 1), b % (len + 1));
    (a.min(b), a.max(b))
}

proptest! {
    #[test]
    fn registry_and_overlay_stay_consistent(base in "[a-z]{0,12}", ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut session = tracked_session(&base);

        for op in ops {
            let len = session.document().len();
            match op {
                Op::Insert(p, text) => {
                    session.insert_text(p % (len + 1), &text).unwrap();
                }
                Op::Delete(a, b) => {
                    let (from, to) = range_in(a, b, len);
                    session.delete_range(from, to).unwrap();
                }
                Op::Replace(a, b, text) => {
                    let (from, to) = range_in(a, b, len);
                    session.replace_range(from, to, &text).unwrap();
                }
                Op::Accept(k) => {
                    let pending = session.pending_changes();
                    if !pending.is_empty() {
                        prop_assert!(session.accept_change(&pending[k % pending.len()].id));
                    }
                }
                Op::Reject(k) => {
                    let pending = session.pending_changes();
                    if !pending.is_empty() {
                        prop_assert!(session.reject_change(&pending[k % pending.len()].id));
                    }
                }
                Op::Toggle => {
                    session.toggle_tracking();
                }
            }

            prop_assert!(session.is_consistent());
            let len = session.document().len();
            for decoration in session.decorations() {
                prop_assert!(decoration.from <= decoration.to && decoration.to <= len);
            }
        }

        let text = session.document().text().to_string();
        let pending = session.pending_changes().len();
        prop_assert_eq!(session.accept_all_changes(), pending);
        prop_assert_eq!(session.document().text(), text.as_str());
        prop_assert!(session.pending_changes().is_empty());
        prop_assert!(session.is_consistent());
    }

    #[test]
    fn reject_all_is_consistent_after_arbitrary_edits(base in "[a-z]{0,12}", ops in prop::collection::vec(op_strategy(), 1..30)) {
        let mut session = tracked_session(&base);

        for op in ops {
            let len = session.document().len();
            match op {
                Op::Insert(p, text) => {
                    session.insert_text(p % (len + 1), &text).unwrap();
                }
                Op::Delete(a, b) | Op::Replace(a, b, _) => {
                    let (from, to) = range_in(a, b, len);
                    session.delete_range(from, to).unwrap();
                }
                _ => {}
            }
        }

        let pending = session.pending_changes().len();
        prop_assert_eq!(session.reject_all_changes(), pending);
        prop_assert!(session.pending_changes().is_empty());
        prop_assert!(session.decorations().is_empty());
        prop_assert_eq!(session.history().len(), pending);
    }

    #[test]
    fn lone_insert_or_delete_is_undone_by_reject(base in "[a-z]{1,16}", a in any::<usize>(), b in any::<usize>(), text in "[a-z]{1,5}", insert in any::<bool>()) {
        let mut session = tracked_session(&base);
        let len = session.document().len();

        let records = if insert {
            session.insert_text(a % (len + 1), &text).unwrap()
        } else {
            let (from, to) = range_in(a, b, len);
            session.delete_range(from, to).unwrap()
        };

        for record in &records {
            prop_assert!(session.reject_change(&record.id));
        }
        prop_assert_eq!(session.document().text(), base.as_str());
        prop_assert!(session.pending_changes().is_empty());
    }

    #[test]
    fn disjoint_steps_classify_and_reject_cleanly(pieces in prop::collection::vec(piece_strategy(), 1..8), tail in "[a-z]{1,3}") {
        let mut base = String::new();
        let mut steps = Vec::new();
        let mut genuine = 0;

        for (gap, piece) in &pieces {
            base.push_str(gap);
            let at = base.chars().count();
            match piece {
                Piece::Insert(text) => {
                    steps.push(Step::Replace { from: at, to: at, text: text.clone() });
                    genuine += 1;
                }
                Piece::Delete(old) => {
                    base.push_str(old);
                    steps.push(Step::Replace { from: at, to: at + old.chars().count(), text: String::new() });
                    genuine += 1;
                }
                Piece::Replace(old, new) => {
                    base.push_str(old);
                    steps.push(Step::Replace { from: at, to: at + old.chars().count(), text: new.clone() });
                    genuine += 1;
                }
            }
        }
        base.push_str(&tail);

        let mut session = tracked_session(&base);
        let mut transaction = session.transaction();
        // Right to left, so every step is still in base coordinates.
        for step in steps.into_iter().rev() {
            transaction.step(step).unwrap();
        }
        let records = session.dispatch(transaction).unwrap();

        prop_assert_eq!(records.len(), genuine);
        prop_assert!(session.is_consistent());

        prop_assert_eq!(session.reject_all_changes(), genuine);
        prop_assert_eq!(session.document().text(), base.as_str());
    }
}
