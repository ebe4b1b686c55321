//! Download URL and checksum resolution for Kibana artefacts.
//!
//! Both operations honour an explicit override first and only then consult
//! the URL templates or the catalog. Neither performs I/O or logging; errors
//! go straight back to the caller.

use crate::arch::Arch;
use crate::catalog::Catalog;
use crate::error::{ResolveError, Result};
use crate::install_method::InstallMethod;
use crate::settings::Settings;
use serde::Serialize;

/// Architecture key the Windows checksum is always looked up under.
const WINDOWS_CHECKSUM_ARCH: &str = "x86";

/// Resolve the download URL for an artefact.
///
/// An `override_url` is returned verbatim. Otherwise the URL is built from
/// `distribution_base_url` using the template for `install_method`. Only the
/// `release` template interpolates `arch`; the Windows archive is always the
/// `x86` zip and the macOS archive is always the `x86_64` tarball. An
/// unrecognised install method yields `None`.
///
/// # Examples
///
/// ```
/// use kibana_artefact::arch::Arch;
/// use kibana_artefact::resolver::resolve_url;
///
/// let url = resolve_url("6.2.4", "release", None, "https://example.com", Arch::X86_64);
/// assert_eq!(
///     url.as_deref(),
///     Some("https://example.com/kibana-6.2.4-linux-x86_64.tar.gz")
/// );
/// ```
#[must_use]
pub fn resolve_url(
    version: &str,
    install_method: &str,
    override_url: Option<&str>,
    distribution_base_url: &str,
    arch: Arch,
) -> Option<String> {
    if let Some(url) = override_url {
        return Some(url.to_owned());
    }

    let base = distribution_base_url;
    match InstallMethod::parse(install_method)? {
        InstallMethod::Release => Some(format!("{base}/kibana-{version}-linux-{arch}.tar.gz")),
        InstallMethod::Windows => Some(format!("{base}/kibana-{version}-windows-x86.zip")),
        InstallMethod::Darwin => Some(format!("{base}/kibana-{version}-darwin-x86_64.tar.gz")),
    }
}

/// Resolve the expected checksum for an artefact.
///
/// An `override_checksum` is returned verbatim. Otherwise the checksum is
/// read from `catalog`: `release` looks up the record for `arch`, while
/// `windows` always looks up `x86`. `darwin` is not dispatched even though
/// the catalog carries `darwin` rows.
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedVersion`] when `version` has no
/// catalog entry, and [`ResolveError::UnsupportedInstallMethod`] for any
/// miss beneath it, including an unrecognised or undispatched method.
///
/// # Examples
///
/// ```
/// use kibana_artefact::arch::Arch;
/// use kibana_artefact::catalog::Catalog;
/// use kibana_artefact::resolver::resolve_checksum;
///
/// let checksum = resolve_checksum("6.2.4", "windows", None, Catalog::builtin(), Arch::X86_64)
///     .expect("6.2.4 ships a Windows zip");
/// assert!(checksum.starts_with("d9fe5dcb"));
/// ```
pub fn resolve_checksum(
    version: &str,
    install_method: &str,
    override_checksum: Option<&str>,
    catalog: &Catalog,
    arch: Arch,
) -> Result<String> {
    if let Some(checksum) = override_checksum {
        return Ok(checksum.to_owned());
    }

    let entry = catalog
        .version(version)
        .ok_or_else(|| ResolveError::UnsupportedVersion {
            version: version.to_owned(),
        })?;

    let arch_key = match InstallMethod::parse(install_method) {
        Some(InstallMethod::Release) => Some(arch.as_str()),
        Some(InstallMethod::Windows) => Some(WINDOWS_CHECKSUM_ARCH),
        Some(InstallMethod::Darwin) | None => None,
    };

    arch_key
        .and_then(|key| entry.method(install_method)?.checksum(key))
        .map(|record| record.as_str().to_owned())
        .ok_or_else(|| ResolveError::UnsupportedInstallMethod {
            install_method: install_method.to_owned(),
        })
}

/// The URL and checksum resolved for one artefact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArtefact {
    /// Download URL, absent when the install method has no URL template.
    pub url: Option<String>,
    /// Expected checksum of the artefact.
    pub checksum: String,
}

/// Resolve URL and checksum from `settings` against the compiled-in catalog.
///
/// # Errors
///
/// Propagates the checksum lookup failure from [`resolve_checksum`].
pub fn resolve_artefact(settings: &Settings, arch: Arch) -> Result<ResolvedArtefact> {
    resolve_artefact_with(settings, Catalog::builtin(), arch)
}

/// Resolve URL and checksum from `settings` against a supplied catalog.
///
/// # Errors
///
/// Propagates the checksum lookup failure from [`resolve_checksum`].
pub fn resolve_artefact_with(
    settings: &Settings,
    catalog: &Catalog,
    arch: Arch,
) -> Result<ResolvedArtefact> {
    let checksum = resolve_checksum(
        &settings.version,
        &settings.install_method,
        settings.checksum_override(),
        catalog,
        arch,
    )?;
    let url = resolve_url(
        &settings.version,
        &settings.install_method,
        settings.url_override(),
        &settings.distribution_base_url,
        arch,
    );
    Ok(ResolvedArtefact { url, checksum })
}
