use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualClass {
    Insertion,
    Deletion,
    Replacement,
    Formatting,
}

impl VisualClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            VisualClass::Insertion => "tracked-change-insert",
            VisualClass::Deletion => "tracked-change-delete",
            VisualClass::Replacement => "tracked-change-replace",
            VisualClass::Formatting => "tracked-change-format",
        }
    }
}
