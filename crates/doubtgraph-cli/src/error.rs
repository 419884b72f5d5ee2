//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Roster file error
    #[error("Roster error: {0}")]
    Roster(String),

    /// Graph service failure that is not a user mistake
    #[error(transparent)]
    Service(#[from] doubtgraph_service::ServiceError),

    /// Rendering failure
    #[error(transparent)]
    Render(#[from] doubtgraph_render::RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A command needs an invoking member
    #[error("No invoking member. Use '/as <member-id>' first.")]
    NoInvoker,
}
