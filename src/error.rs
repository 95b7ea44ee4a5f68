use thiserror::Error;

use crate::{
    assembler::AssemblyError,
    configuration::ConfigurationError,
    context::ContextError,
    format::FormattingError,
    platform::{ConnectError, RemoteError},
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Error related to loading or saving the profile document
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
    #[error(transparent)]
    ContextError(#[from] ContextError),
    /// A `--config*` or `--secret` parameter could not be turned into JSON
    #[error(transparent)]
    AssemblyError(#[from] AssemblyError),
    /// Kubernetes or platform bootstrap failed
    #[error(transparent)]
    ConnectError(#[from] ConnectError),
    #[error(transparent)]
    RemoteError(#[from] RemoteError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] FormattingError),
}
