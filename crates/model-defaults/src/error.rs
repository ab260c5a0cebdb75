//! Error types for model-defaults

use std::path::PathBuf;

/// Result type for model-defaults operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the registry or matching values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Definition source '{name}' is unavailable: {reason}")]
    DefinitionSourceUnavailable { name: String, reason: String },

    #[error("Definition source '{name}' has a malformed escape sequence on line {line}")]
    InvalidPropertyEscape { name: String, line: usize },

    #[error("{root} definitions contain invalid defaults key: {key}")]
    MalformedDefinitionKey { root: String, key: String },

    #[error("Invalid boolean value: {value}")]
    InvalidBooleanLiteral { value: String },

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DefinitionSourceUnavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that abort registry construction.
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::DefinitionSourceUnavailable { .. }
                | Self::InvalidPropertyEscape { .. }
                | Self::MalformedDefinitionKey { .. }
        )
    }
}
