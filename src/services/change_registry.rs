use std::collections::HashMap;
use crate::enums::change_status::ChangeStatus;
use crate::structs::change_record::ChangeRecord;

#[derive(Debug, Default)]
pub struct ChangeRegistry {
    pending: HashMap<String, ChangeRecord>,
    history: Vec<ChangeRecord>,
}

impl ChangeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ChangeRecord) {
        self.pending.insert(record.id.clone(), record);
    }

    pub fn get(&self, change_id: &str) -> Option<&ChangeRecord> {
        self.pending.get(change_id)
    }

    pub fn find(&self, change_id: &str) -> Option<&ChangeRecord> {
        self.pending
            .get(change_id)
            .or_else(|| self.history.iter().rev().find(|record| record.id == change_id))
    }

    pub fn is_pending(&self, change_id: &str) -> bool {
        self.pending.contains_key(change_id)
    }

    pub fn pending(&self) -> Vec<ChangeRecord> {
        let mut records: Vec<ChangeRecord> = self.pending.values().cloned().collect();
        records.sort_by_key(|record| record.sequence);
        records
    }

    pub fn pending_ids(&self) -> Vec<String> {
        self.pending().into_iter().map(|record| record.id).collect()
    }

    pub fn history(&self) -> &[ChangeRecord] {
        &self.history
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn resolve(&mut self, change_id: &str, status: ChangeStatus) -> Option<ChangeRecord> {
        let current = self.pending.get(change_id)?.status;
        if !current.can_transition_to(status) {
            return None;
        }

        let mut record = self.pending.remove(change_id)?;
        record.status = status;
        self.history.push(record.clone());
        Some(record)
    }
}
