use std::sync::atomic::{AtomicU64, Ordering};
use chrono::{DateTime, Utc};
use uuid::Uuid;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub struct IdGenerator;

impl IdGenerator {
    pub fn next_sequence() -> u64 {
        SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn change_id(created_at: DateTime<Utc>, sequence: u64) -> String {
        let random = Uuid::new_v4().simple().to_string();
        format!("change-{}-{}-{}", created_at.timestamp_millis(), sequence, &random[..8])
    }

    pub fn session_id() -> String {
        Uuid::new_v4().to_string()
    }
}
