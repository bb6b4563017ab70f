use serde::{Deserialize, Serialize};
use crate::enums::assoc::Assoc;
use crate::errors::{TrackError, TrackResult};
use crate::structs::step_map::StepMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSpan {
    pub from: usize,
    pub to: usize,
    pub mark: String,
}

/// Document snapshot. Positions are character offsets into the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    text: String,
    #[serde(default)]
    marks: Vec<MarkSpan>,
    #[serde(default)]
    version: u64,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
            version: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn marks(&self) -> &[MarkSpan] {
        &self.marks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text_between(&self, from: usize, to: usize) -> Option<String> {
        if from > to {
            return None;
        }
        let start = self.byte_offset(from)?;
        let end = self.byte_offset(to)?;
        Some(self.text[start..end].to_string())
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Replaces `from..to` with `text`, returning the removed text and the
    /// step map describing the edit.
    pub(crate) fn replace(&mut self, from: usize, to: usize, text: &str) -> TrackResult<(String, StepMap)> {
        let length = self.len();
        if from > to || to > length {
            return Err(TrackError::invalid_range(from, to, length));
        }

        let start = self.byte_offset(from).ok_or_else(|| TrackError::invalid_range(from, to, length))?;
        let end = self.byte_offset(to).ok_or_else(|| TrackError::invalid_range(from, to, length))?;
        let removed = self.text[start..end].to_string();
        self.text.replace_range(start..end, text);

        let map = StepMap::new(from, to - from, text.chars().count());
        self.marks = self
            .marks
            .drain(..)
            .filter_map(|span| {
                let new_from = map.map(span.from, Assoc::After);
                let new_to = map.map(span.to, Assoc::Before);
                (new_from < new_to).then(|| MarkSpan { from: new_from, to: new_to, mark: span.mark })
            })
            .collect();

        Ok((removed, map))
    }

    pub(crate) fn add_mark(&mut self, from: usize, to: usize, mark: &str) -> TrackResult<()> {
        let length = self.len();
        if from > to || to > length {
            return Err(TrackError::invalid_range(from, to, length));
        }
        if from < to {
            self.marks.push(MarkSpan { from, to, mark: mark.to_string() });
        }
        Ok(())
    }

    fn byte_offset(&self, pos: usize) -> Option<usize> {
        if pos == 0 {
            return Some(0);
        }
        self.text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(self.text.len()))
            .nth(pos)
    }
}
