use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Option<String>,
    pub name: String,
}

impl Author {
    pub fn new(id: Option<&str>, name: &str) -> Self {
        Self {
            id: id.map(|s| s.to_string()),
            name: name.to_string(),
        }
    }
}
