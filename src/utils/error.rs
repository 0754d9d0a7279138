use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    /// A value was rejected by a brand predicate. Display is the bare message.
    #[error("{message}")]
    TypeMismatch { message: String },

    #[error("{message}")]
    EmptySelection { message: String },

    #[error("Missing template replacements: {}", .variables.join(", "))]
    MissingReplacement { variables: Vec<String> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UtilsError {
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeMismatch { .. } => ErrorCategory::Validation,
            Self::EmptySelection { .. } | Self::MissingReplacement { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_)
            | Self::PatternError(_) => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TypeMismatch { message } | Self::EmptySelection { message } => message.clone(),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the value against the brand rule in your configuration",
            ErrorCategory::Input => "Check the command arguments",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::System => "Check file permissions and that the path exists",
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display_is_bare_message() {
        let err = UtilsError::type_mismatch("bad email");
        assert_eq!(err.to_string(), "bad email");
        assert!(err.is_type_mismatch());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_missing_replacement_lists_variables() {
        let err = UtilsError::MissingReplacement {
            variables: vec!["name".to_string(), "age".to_string()],
        };
        assert_eq!(err.to_string(), "Missing template replacements: name, age");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = UtilsError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_type_mismatch());
    }
}
