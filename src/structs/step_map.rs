use serde::{Deserialize, Serialize};
use crate::enums::assoc::Assoc;

/// Position map of a single step: `old_size` characters at `start` became
/// `new_size` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMap {
    pub start: usize,
    pub old_size: usize,
    pub new_size: usize,
}

impl StepMap {
    pub fn new(start: usize, old_size: usize, new_size: usize) -> Self {
        Self { start, old_size, new_size }
    }

    pub fn identity() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn is_identity(&self) -> bool {
        self.old_size == 0 && self.new_size == 0
    }

    pub fn map(&self, pos: usize, assoc: Assoc) -> usize {
        let end = self.start + self.old_size;
        if pos < self.start {
            return pos;
        }
        if pos > end {
            return pos - self.old_size + self.new_size;
        }

        // Inside the replaced range: the boundaries of a non-empty range stick
        // to their own side, everything else follows `assoc`.
        let stick_before = if self.old_size == 0 {
            assoc == Assoc::Before
        } else if pos == self.start {
            true
        } else if pos == end {
            false
        } else {
            assoc == Assoc::Before
        };

        if stick_before {
            self.start
        } else {
            self.start + self.new_size
        }
    }
}

/// Ordered list of step maps, one per step of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    maps: Vec<StepMap>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, map: StepMap) {
        self.maps.push(map);
    }

    pub fn maps(&self) -> &[StepMap] {
        &self.maps
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn slice(&self, from_index: usize) -> Mapping {
        Mapping {
            maps: self.maps.get(from_index..).map(|m| m.to_vec()).unwrap_or_default(),
        }
    }

    pub fn map(&self, pos: usize, assoc: Assoc) -> usize {
        self.maps.iter().fold(pos, |pos, map| map.map(pos, assoc))
    }

    /// Maps a range so that content inserted at either edge stays outside it.
    /// A range whose content was removed collapses onto its start.
    pub fn map_range(&self, from: usize, to: usize) -> (usize, usize) {
        let start = self.map(from, Assoc::After);
        let end = self.map(to, Assoc::Before);
        if end < start {
            (end, end)
        } else {
            (start, end)
        }
    }
}
