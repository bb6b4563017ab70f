use std::collections::{HashMap, HashSet};
use crate::structs::decoration::Decoration;
use crate::structs::transaction::Transaction;

#[derive(Debug, Default)]
pub struct DecorationOverlay {
    decorations: HashMap<String, Decoration>,
}

impl DecorationOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, decoration: Decoration) {
        self.decorations.insert(decoration.change_id.clone(), decoration);
    }

    pub fn remove(&mut self, change_id: &str) -> Option<Decoration> {
        self.decorations.remove(change_id)
    }

    pub fn get(&self, change_id: &str) -> Option<&Decoration> {
        self.decorations.get(change_id)
    }

    pub fn contains(&self, change_id: &str) -> bool {
        self.decorations.contains_key(change_id)
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn ids(&self) -> HashSet<String> {
        self.decorations.keys().cloned().collect()
    }

    /// Carries every decoration through the transaction's position mapping.
    pub fn remap(&mut self, transaction: &Transaction) {
        if !transaction.doc_changed() {
            return;
        }
        for decoration in self.decorations.values_mut() {
            decoration.remap(transaction.mapping());
        }
    }

    pub fn sorted(&self) -> Vec<Decoration> {
        let mut decorations: Vec<Decoration> = self.decorations.values().cloned().collect();
        decorations.sort_by_key(|decoration| (decoration.from, decoration.to, decoration.sequence));
        decorations
    }

    /// Resolves a position to one decoration. When several overlap, the most
    /// recently created one wins.
    pub fn at(&self, pos: usize) -> Option<&Decoration> {
        self.decorations
            .values()
            .filter(|decoration| decoration.contains(pos))
            .max_by_key(|decoration| decoration.sequence)
    }
}
