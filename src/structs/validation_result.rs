use crate::errors::{TrackError, TrackResult};

/// A problem with one config key, e.g. `server.port_range_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigIssue>,
    pub warnings: Vec<ConfigIssue>,
}

impl ValidationResult {
    pub fn error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(ConfigIssue { field, message: message.into() });
    }

    pub fn warn(&mut self, field: &'static str, message: impl Into<String>) {
        self.warnings.push(ConfigIssue { field, message: message.into() });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|issue| issue.field).collect()
    }

    /// Fails with the first error, naming its key.
    pub fn into_result(self) -> TrackResult<()> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some(issue) => Err(TrackError::config_error(
                &issue.message,
                Some(issue.field),
                Some("Fix the value in the config file or run 'tracked-changes validate'"),
            )),
        }
    }

    pub fn print_summary(&self) {
        if self.is_valid() {
            println!("✅ Validation passed");
        } else {
            println!("❌ Validation failed with {} errors", self.errors.len());
        }

        if !self.warnings.is_empty() {
            println!("⚠️ {} warnings found", self.warnings.len());
        }

        for issue in &self.errors {
            println!("   ❌ [{}] {}", issue.field, issue.message);
        }

        for issue in &self.warnings {
            println!("   ⚠️ [{}] {}", issue.field, issue.message);
        }
    }
}
