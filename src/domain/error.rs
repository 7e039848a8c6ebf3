use std::io;

use thiserror::Error;

/// Library-wide error type for mergelog operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file is present but its values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Event payload could not be decoded.
    #[error("Failed to parse pull request event: {0}")]
    EventParseError(#[from] serde_json::Error),

    /// Neither an event payload nor a description source was given.
    #[error("No pull request event found. Pass --event, set GITHUB_EVENT_PATH, or use --description-file")]
    EventNotFound,

    /// Entry or commit message template failed to load or render.
    #[error("Template error in {name}: {details}")]
    TemplateError { name: String, details: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Invalid input at the command boundary.
    #[error("{0}")]
    Validation(String),

    /// Unexpected internal failure (serialization of our own output, etc.).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub fn template_error<N: Into<String>, D: ToString>(name: N, details: D) -> Self {
        AppError::TemplateError { name: name.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::EventParseError(_)
            | AppError::TemplateError { .. }
            | AppError::Validation(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) | AppError::EventNotFound => io::ErrorKind::NotFound,
            AppError::GitError { .. } | AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
