use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Reference data unavailable ({source_name}): {reason}")]
    DataUnavailable { source_name: String, reason: String },

    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Request,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GuideError {
    pub fn data_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_request(message: impl ToString) -> Self {
        Self::MalformedRequest {
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GuideError::DataUnavailable { .. } => ErrorCategory::Data,
            GuideError::MalformedRequest { .. } => ErrorCategory::Request,
            GuideError::IoError(_) | GuideError::SerializationError(_) => ErrorCategory::System,
            GuideError::ConfigError { .. }
            | GuideError::ConfigValidationError { .. }
            | GuideError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 單一請求失敗，不影響後續請求
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GuideError::DataUnavailable { source_name, .. } => {
                format!("Reference data '{}' could not be loaded", source_name)
            }
            GuideError::MalformedRequest { message } => {
                format!("The request could not be understood: {}", message)
            }
            GuideError::IoError(e) => format!("A file system error occurred: {}", e),
            GuideError::SerializationError(e) => format!("Output could not be encoded as JSON: {}", e),
            GuideError::ConfigError { message } => format!("Configuration problem: {}", message),
            GuideError::ConfigValidationError { field, .. }
            | GuideError::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is invalid", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GuideError::DataUnavailable { .. } => {
                "Check that medical_db.json and first_aid_db.json exist in the data directory and are valid JSON"
            }
            GuideError::MalformedRequest { .. } => {
                "Send a JSON body such as {\"symptoms\": [\"headache\"]} with Content-Type: application/json"
            }
            GuideError::IoError(_) => "Check file permissions and available disk space",
            GuideError::SerializationError(_) => "Report this as a bug together with the request that caused it",
            GuideError::ConfigError { .. }
            | GuideError::ConfigValidationError { .. }
            | GuideError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
