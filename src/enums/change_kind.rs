use std::fmt;
use serde::{Deserialize, Serialize};
use crate::enums::visual_class::VisualClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Delete,
    Replace,
    Format,
}

impl ChangeKind {
    pub fn visual_class(&self) -> VisualClass {
        match self {
            ChangeKind::Insert => VisualClass::Insertion,
            ChangeKind::Delete => VisualClass::Deletion,
            ChangeKind::Replace => VisualClass::Replacement,
            ChangeKind::Format => VisualClass::Formatting,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Insert => "insert",
            ChangeKind::Delete => "delete",
            ChangeKind::Replace => "replace",
            ChangeKind::Format => "format",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
