use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrdocError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BrdocError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BrdocError::IoError(_) => ErrorCategory::Io,
            BrdocError::SerializationError(_) => ErrorCategory::Output,
            BrdocError::TomlError(_)
            | BrdocError::ConfigError { .. }
            | BrdocError::MissingConfigError { .. }
            | BrdocError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BrdocError::IoError(_) => "Check that the config file exists and is readable",
            BrdocError::SerializationError(_) => "Try --format text",
            BrdocError::TomlError(_) => "Fix the TOML syntax in the config file",
            BrdocError::ConfigError { .. } => "Review the configuration file",
            BrdocError::MissingConfigError { .. } => "Provide the missing value on the command line",
            BrdocError::InvalidConfigValueError { .. } => "Correct the value and try again",
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BrdocError::MissingConfigError { field } => {
                format!("Missing required value: {}", field)
            }
            BrdocError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrdocError>;
