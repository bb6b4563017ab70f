use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum TrackError {
    // Document/transaction errors
    #[error("edit range {from}..{to} is outside the document (length {doc_length})")]
    InvalidRange {
        from: usize,
        to: usize,
        doc_length: usize,
    },
    #[error("transaction was built against document version {actual_version}, current version is {expected_version}")]
    StaleTransaction {
        expected_version: u64,
        actual_version: u64,
    },

    // Configuration errors
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Parser errors
    #[error("parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Session errors
    #[error("editing session '{session_id}' not found")]
    SessionNotFound {
        session_id: String,
    },
    #[error("change '{change_id}' cannot move from {from} to {to}")]
    InvalidStatusTransition {
        change_id: String,
        from: String,
        to: String,
    },

    // System errors
    #[error("system error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl TrackError {
    pub fn invalid_range(from: usize, to: usize, doc_length: usize) -> Self {
        Self::InvalidRange { from, to, doc_length }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
        }
    }

    pub fn session_not_found(session_id: &str) -> Self {
        Self::SessionNotFound {
            session_id: session_id.to_string(),
        }
    }

    pub fn invalid_transition(change_id: &str, from: &str, to: &str) -> Self {
        Self::InvalidStatusTransition {
            change_id: change_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidRange { .. } => true,
            Self::StaleTransaction { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::InvalidStatusTransition { .. } => true,
            Self::SessionNotFound { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::ParseError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::SessionNotFound { .. } => ErrorSeverity::Medium,
            Self::StaleTransaction { .. } => ErrorSeverity::Medium,
            Self::InvalidRange { .. } => ErrorSeverity::Low,
            Self::InvalidStatusTransition { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRange { from, to, doc_length } => {
                format!(
                    "Edit range {}..{} is outside the document (length {})\n💡 Positions must satisfy from <= to <= length",
                    from, to, doc_length
                )
            }
            Self::StaleTransaction { expected_version, actual_version } => {
                format!(
                    "Transaction targets document version {} but the document is at version {}\n💡 Rebuild the transaction from the current document",
                    actual_version, expected_version
                )
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::SessionNotFound { session_id } => {
                format!("Editing session '{}' not found\n💡 Create the manuscript session first", session_id)
            }
            Self::InvalidStatusTransition { change_id, from, to } => {
                format!(
                    "Change '{}' cannot move from {} to {}\n💡 Resolved changes are final",
                    change_id, from, to
                )
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for tracked-changes operations
pub type TrackResult<T> = Result<T, TrackError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &TrackError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - fix the input and retry");
        }
    }
}

impl From<std::io::Error> for TrackError {
    fn from(error: std::io::Error) -> Self {
        TrackError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TrackError {
    fn from(error: serde_json::Error) -> Self {
        TrackError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for TrackError {
    fn from(error: toml::de::Error) -> Self {
        TrackError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}
