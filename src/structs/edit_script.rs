use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::enums::edit_action::EditAction;
use crate::errors::{TrackError, TrackResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditScript {
    #[serde(default)]
    pub document: String,

    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub tracking: Option<bool>,

    #[serde(default)]
    pub actions: Vec<EditAction>,
}

impl EditScript {
    pub fn from_json(content: &str) -> TrackResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> TrackResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TrackError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        Self::from_json(&content)
    }
}
