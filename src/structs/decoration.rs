use serde::{Deserialize, Serialize};
use crate::enums::visual_class::VisualClass;
use crate::structs::step_map::Mapping;
use crate::enums::assoc::Assoc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    pub change_id: String,
    pub from: usize,
    pub to: usize,
    pub visual_class: VisualClass,
    pub sequence: u64,
}

impl Decoration {
    pub fn new(change_id: &str, range: (usize, usize), visual_class: VisualClass, sequence: u64) -> Self {
        Self {
            change_id: change_id.to_string(),
            from: range.0,
            to: range.1,
            visual_class,
            sequence,
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.visual_class == VisualClass::Deletion
    }

    pub fn range(&self) -> (usize, usize) {
        (self.from, self.to)
    }

    pub fn contains(&self, pos: usize) -> bool {
        if self.from == self.to {
            pos == self.from
        } else {
            self.from <= pos && pos < self.to
        }
    }

    pub fn remap(&mut self, mapping: &Mapping) {
        if self.is_anchor() {
            let anchor = mapping.map(self.from, Assoc::Before);
            self.from = anchor;
            self.to = anchor;
        } else {
            let (from, to) = mapping.map_range(self.from, self.to);
            self.from = from;
            self.to = to;
        }
    }
}
