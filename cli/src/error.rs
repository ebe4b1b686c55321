//! Error types for the Kibana artefact CLI.
//!
//! Each variant maps to a distinct process exit code so that provisioning
//! scripts can tell an unsupported request apart from a broken settings file.

use kibana_artefact::{ResolveError, SettingsError};
use thiserror::Error;

/// Errors that can end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested version or install method is not in the catalog.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The settings file could not be read or parsed.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Writing the result to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Serialising the result as JSON failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Return the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Resolve(_) => 1,
            Self::Settings(_) => 2,
            Self::Output(_) | Self::Json(_) => 3,
        }
    }
}

/// Result type alias using [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
