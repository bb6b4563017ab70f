use crate::enums::step::Step;
use crate::errors::{TrackError, TrackResult};
use crate::structs::document::Document;
use crate::structs::step_map::{Mapping, StepMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedStep {
    pub step: Step,
    /// Text removed by the step, `None` for steps that do not touch content.
    pub removed: Option<String>,
    pub map: StepMap,
}

impl AppliedStep {
    pub fn inserted(&self) -> Option<&str> {
        self.step.inserted_text()
    }
}

/// An atomic batch of steps built against one document snapshot.
#[derive(Debug, Clone)]
pub struct Transaction {
    before: Document,
    doc: Document,
    steps: Vec<AppliedStep>,
    mapping: Mapping,
    tracked: bool,
}

impl Transaction {
    pub fn new(doc: &Document) -> Self {
        Self {
            before: doc.clone(),
            doc: doc.clone(),
            steps: Vec::new(),
            mapping: Mapping::new(),
            tracked: true,
        }
    }

    pub fn insert(&mut self, pos: usize, text: &str) -> TrackResult<&mut Self> {
        self.replace(pos, pos, text)
    }

    pub fn delete(&mut self, from: usize, to: usize) -> TrackResult<&mut Self> {
        self.replace(from, to, "")
    }

    pub fn replace(&mut self, from: usize, to: usize, text: &str) -> TrackResult<&mut Self> {
        self.step(Step::Replace { from, to, text: text.to_string() })
    }

    pub fn format(&mut self, from: usize, to: usize, mark: &str) -> TrackResult<&mut Self> {
        self.step(Step::Format { from, to, mark: mark.to_string() })
    }

    /// Applies a step to the working document. Positions are in the
    /// coordinates produced by the previous step.
    pub fn step(&mut self, step: Step) -> TrackResult<&mut Self> {
        let (removed, map) = match &step {
            Step::Replace { from, to, text } => {
                let (removed, map) = self.doc.replace(*from, *to, text)?;
                (Some(removed), map)
            }
            Step::Format { from, to, mark } => {
                self.doc.add_mark(*from, *to, mark)?;
                (None, StepMap::identity())
            }
        };

        let applied = AppliedStep { step, removed, map };
        self.mapping.push(applied.map);
        self.steps.push(applied);
        Ok(self)
    }

    /// Tags the transaction so the change classifier ignores it.
    pub fn without_tracking(mut self) -> Self {
        self.tracked = false;
        self
    }

    pub fn is_tracked(&self) -> bool {
        self.tracked
    }

    pub fn before(&self) -> &Document {
        &self.before
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn steps(&self) -> &[AppliedStep] {
        &self.steps
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn doc_changed(&self) -> bool {
        self.steps.iter().any(|applied| !applied.map.is_identity())
    }

    pub(crate) fn ensure_based_on(&self, current: &Document) -> TrackResult<()> {
        if self.before.version() != current.version() || self.before.text() != current.text() {
            return Err(TrackError::StaleTransaction {
                expected_version: current.version(),
                actual_version: self.before.version(),
            });
        }
        Ok(())
    }

    pub(crate) fn into_doc(self) -> Document {
        let mut doc = self.doc;
        doc.bump_version();
        doc
    }
}
