//! Settings that feed artefact resolution.
//!
//! `Settings` gathers the values a provisioning run supplies: the target
//! version and install method, the distribution base URL, and the optional
//! URL and checksum overrides. Values are deserialised from TOML and fall
//! back to the defaults below when omitted.
//!
//! ```toml
//! version = "5.6.5"
//! install_method = "windows"
//! distribution_base_url = "https://mirror.example.com/kibana"
//! checksum = "07b2c45c985eba3f3a0bae27acb0e5c423e2352d816fc62117ca50f216f0c557"
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Version resolved when none is configured.
pub const DEFAULT_VERSION: &str = "6.2.4";

/// Install method used when none is configured.
pub const DEFAULT_INSTALL_METHOD: &str = "release";

/// Upstream location of Kibana distribution archives.
pub const DEFAULT_DISTRIBUTION_BASE_URL: &str = "https://artifacts.elastic.co/downloads/kibana";

/// Inputs to artefact resolution.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Kibana version to resolve.
    pub version: String,
    /// Install-method tag (`release`, `windows`, `darwin`).
    pub install_method: String,
    /// Base URL the archive name is appended to.
    pub distribution_base_url: String,
    /// Explicit download URL that bypasses the URL templates.
    pub url: Option<String>,
    /// Explicit checksum that bypasses the catalog.
    pub checksum: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_owned(),
            install_method: DEFAULT_INSTALL_METHOD.to_owned(),
            distribution_base_url: DEFAULT_DISTRIBUTION_BASE_URL.to_owned(),
            url: None,
            checksum: None,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the document is malformed, a value has
    /// the wrong type, or an unknown key is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use kibana_artefact::settings::Settings;
    ///
    /// let settings = Settings::from_toml_str("version = \"5.6.5\"\n").expect("valid TOML");
    /// assert_eq!(settings.version, "5.6.5");
    /// assert_eq!(settings.install_method, "release");
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read and parse settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] when the file cannot be read and
    /// [`SettingsError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, SettingsError> {
        debug!("loading settings from {path}");
        let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&source).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source: Box::new(source),
        })
    }

    /// Return the URL override, if one is configured.
    ///
    /// A configured value is returned as-is, including an empty string.
    #[must_use]
    pub fn url_override(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Return the checksum override, if one is configured.
    #[must_use]
    pub fn checksum_override(&self) -> Option<&str> {
        self.checksum.as_deref()
    }
}

/// Errors raised while loading settings from disk.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file {path}")]
    Read {
        /// Path of the settings file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid settings TOML.
    #[error("invalid settings file {path}: {source}")]
    Parse {
        /// Path of the settings file.
        path: Utf8PathBuf,
        /// The TOML parser's error.
        #[source]
        source: Box<toml::de::Error>,
    },
}
