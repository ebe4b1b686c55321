//! Error types for artefact checksum resolution.
//!
//! Only two failures exist: the version is missing from the catalog, or the
//! version exists but the requested install method cannot be resolved for
//! it. Every miss below the version level collapses into the second kind.

use thiserror::Error;

/// Errors arising from catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The requested version has no catalog entry at all.
    #[error("Kibana version {version} is not supported by the catalog")]
    UnsupportedVersion {
        /// The rejected version string.
        version: String,
    },

    /// The version exists but the install method (or the architecture
    /// beneath it) has no checksum record.
    #[error("install method {install_method} is not supported for this version of Kibana")]
    UnsupportedInstallMethod {
        /// The rejected install-method tag.
        install_method: String,
    },
}

/// Result type alias using [`ResolveError`].
pub type Result<T> = std::result::Result<T, ResolveError>;
