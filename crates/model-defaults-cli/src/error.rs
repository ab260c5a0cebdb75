//! Error types for model-defaults-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from model-defaults
    #[error(transparent)]
    Defaults(#[from] model_defaults::Error),

    /// A value given with --json-values is not valid JSON
    #[error("Invalid JSON value '{input}': {source}")]
    Json {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    /// Command output could not be rendered as JSON
    #[error("Failed to render JSON output: {0}")]
    Render(#[from] serde_json::Error),
}
