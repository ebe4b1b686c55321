//! Kibana artefact resolution.
//!
//! This crate answers two questions for a provisioning workflow: where to
//! download a Kibana distribution archive from, and which checksum the
//! archive is expected to have. It also classifies the running machine into
//! the coarse architecture tag that selects between archive variants. Nothing
//! here downloads, verifies, or persists anything.
//!
//! # Modules
//!
//! - [`arch`] - Two-way architecture classifier
//! - [`catalog`] - Compiled-in version → method → arch → checksum table
//! - [`checksum`] - Opaque checksum record
//! - [`error`] - Lookup error taxonomy
//! - [`install_method`] - Recognised install-method tags
//! - [`machine`] - Machine identifier introspection
//! - [`resolver`] - URL and checksum resolution
//! - [`settings`] - Resolution inputs loaded from TOML

pub mod arch;
pub mod catalog;
pub mod checksum;
pub mod error;
pub mod install_method;
pub mod machine;
pub mod resolver;
pub mod settings;

pub use arch::{Arch, classify_architecture};
pub use catalog::Catalog;
pub use error::ResolveError;
pub use resolver::{ResolvedArtefact, resolve_artefact, resolve_checksum, resolve_url};
pub use settings::{Settings, SettingsError};
