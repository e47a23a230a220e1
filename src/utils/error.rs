use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid rewrite pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RewriteError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RewriteError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "Target file was not found".to_string(),
                std::io::ErrorKind::PermissionDenied => {
                    "Permission denied while accessing the target file".to_string()
                }
                std::io::ErrorKind::InvalidData => "Target file is not valid UTF-8".to_string(),
                _ => format!("File operation failed: {}", e),
            },
            RewriteError::PatternError(_) => {
                "Could not build the fetch rewrite patterns".to_string()
            }
            RewriteError::ConfigError { message } => format!("Configuration problem: {}", message),
            RewriteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    /// Every failure is fatal and reported the same way.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RewriteError::IoError(_) => {
                "Check that --file points at an existing, writable UTF-8 source file"
            }
            RewriteError::PatternError(_) => "Use a plain path such as \"/api/\" for fetch.api_prefix",
            RewriteError::ConfigError { .. } => {
                "Check the TOML configuration file passed with --config"
            }
            RewriteError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;
