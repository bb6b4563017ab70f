use serde::{Deserialize, Serialize};

/// Primitive edit inside a transaction, in the coordinates of the document
/// as it is right before the step applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Step {
    /// Replace `from..to` with `text`. Covers insertion (`from == to`) and
    /// deletion (empty `text`).
    #[serde(rename = "replace")]
    Replace {
        from: usize,
        to: usize,
        text: String,
    },
    /// Apply a formatting mark over `from..to`. Content is unchanged.
    #[serde(rename = "format")]
    Format {
        from: usize,
        to: usize,
        mark: String,
    },
}

impl Step {
    pub fn range(&self) -> (usize, usize) {
        match self {
            Step::Replace { from, to, .. } | Step::Format { from, to, .. } => (*from, *to),
        }
    }

    pub fn inserted_text(&self) -> Option<&str> {
        match self {
            Step::Replace { text, .. } => Some(text),
            Step::Format { .. } => None,
        }
    }
}
