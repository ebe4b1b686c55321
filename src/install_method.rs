//! Install-method tags understood by the resolver.
//!
//! Callers pass install methods as plain strings because an unknown tag is
//! not an input error here: URL resolution yields nothing and checksum
//! resolution reports an unsupported method.

/// A recognised packaging channel for Kibana artefacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallMethod {
    /// Linux release tarball.
    Release,
    /// Windows zip archive.
    Windows,
    /// macOS tarball.
    Darwin,
}

impl InstallMethod {
    /// Every recognised install method, in catalog order.
    pub const ALL: [Self; 3] = [Self::Release, Self::Windows, Self::Darwin];

    /// Parse an install-method tag, returning `None` for unknown tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use kibana_artefact::install_method::InstallMethod;
    ///
    /// assert_eq!(InstallMethod::parse("windows"), Some(InstallMethod::Windows));
    /// assert_eq!(InstallMethod::parse("deb"), None);
    /// ```
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == tag)
    }

    /// Return the tag used in settings and catalog keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Windows => "windows",
            Self::Darwin => "darwin",
        }
    }
}
