//! Output formatting for the CLI.
//!
//! Text output is line-oriented `key=value` pairs so shell scripts can read
//! it without a JSON parser; `--json` emits the same data as an object.

use crate::error::Result;
use kibana_artefact::catalog::Catalog;
use kibana_artefact::{Arch, ResolvedArtefact};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;

/// One catalogued version and the architectures published per method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionListing {
    /// Kibana version.
    pub version: String,
    /// Architecture keys published for each install method, in table order.
    pub methods: IndexMap<String, Vec<String>>,
}

/// Summarise `catalog` for listing, one entry per version in table order.
#[must_use]
pub fn version_listings(catalog: &Catalog) -> Vec<VersionListing> {
    catalog
        .versions()
        .map(|(version, entry)| VersionListing {
            version: version.to_owned(),
            methods: entry
                .methods()
                .map(|(method, method_entry)| {
                    let archs = method_entry
                        .archs()
                        .map(|(arch, _)| arch.to_owned())
                        .collect();
                    (method.to_owned(), archs)
                })
                .collect(),
        })
        .collect()
}

/// Write a resolved artefact.
///
/// In text mode the `url` line is omitted when no URL resolved.
///
/// # Errors
///
/// Returns an error when writing or JSON encoding fails.
pub fn write_resolved(out: &mut dyn Write, resolved: &ResolvedArtefact, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, resolved)?;
        writeln!(out)?;
        return Ok(());
    }
    if let Some(url) = &resolved.url {
        writeln!(out, "url={url}")?;
    }
    writeln!(out, "checksum={}", resolved.checksum)?;
    Ok(())
}

/// Write the catalog listing.
///
/// # Errors
///
/// Returns an error when writing or JSON encoding fails.
pub fn write_versions(out: &mut dyn Write, listings: &[VersionListing], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, listings)?;
        writeln!(out)?;
        return Ok(());
    }
    for listing in listings {
        let methods: Vec<String> = listing
            .methods
            .iter()
            .map(|(method, archs)| format!("{method}:{}", archs.join(",")))
            .collect();
        writeln!(out, "{} {}", listing.version, methods.join(" "))?;
    }
    Ok(())
}

/// Write the architecture tag for a machine identifier.
///
/// # Errors
///
/// Returns an error when writing fails.
pub fn write_arch(out: &mut dyn Write, machine: &str, arch: Arch) -> Result<()> {
    writeln!(out, "machine={machine}")?;
    writeln!(out, "arch={arch}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibana_artefact::catalog::CatalogRow;
    use rstest::{fixture, rstest};

    #[fixture]
    fn resolved() -> ResolvedArtefact {
        ResolvedArtefact {
            url: Some("https://example.com/kibana-6.2.4-linux-x86_64.tar.gz".to_owned()),
            checksum: "abc".to_owned(),
        }
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("write succeeds");
        String::from_utf8(buffer).expect("output is UTF-8")
    }

    #[rstest]
    fn text_output_lists_url_then_checksum(resolved: ResolvedArtefact) {
        let text = render(|out| write_resolved(out, &resolved, false));
        assert_eq!(
            text,
            "url=https://example.com/kibana-6.2.4-linux-x86_64.tar.gz\nchecksum=abc\n"
        );
    }

    #[rstest]
    fn text_output_omits_absent_url(mut resolved: ResolvedArtefact) {
        resolved.url = None;
        let text = render(|out| write_resolved(out, &resolved, false));
        assert_eq!(text, "checksum=abc\n");
    }

    #[rstest]
    fn json_output_carries_null_url(mut resolved: ResolvedArtefact) {
        resolved.url = None;
        let text = render(|out| write_resolved(out, &resolved, true));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert!(value["url"].is_null());
        assert_eq!(value["checksum"], "abc");
    }

    #[test]
    fn listings_group_arches_by_method() {
        let catalog = Catalog::from_rows(&[
            CatalogRow {
                version: "1.0.0",
                install_method: "release",
                arch: "x86_64",
                checksum: "aa",
            },
            CatalogRow {
                version: "1.0.0",
                install_method: "release",
                arch: "x86",
                checksum: "bb",
            },
            CatalogRow {
                version: "1.0.0",
                install_method: "windows",
                arch: "x64",
                checksum: "cc",
            },
        ]);

        let listings = version_listings(&catalog);
        let text = render(|out| write_versions(out, &listings, false));

        assert_eq!(text, "1.0.0 release:x86_64,x86 windows:x64\n");
    }

    #[test]
    fn builtin_listing_covers_every_version() {
        let listings = version_listings(Catalog::builtin());
        assert_eq!(listings.len(), 9);
        let newest = listings.first().expect("catalog is not empty");
        assert_eq!(newest.version, "6.2.4");
        let methods: Vec<&str> = newest.methods.keys().map(String::as_str).collect();
        assert_eq!(methods, ["release", "windows", "darwin"]);
        let oldest = listings.last().expect("catalog is not empty");
        assert_eq!(oldest.version, "5.2.0");
    }

    #[test]
    fn arch_output_shows_machine_and_tag() {
        let text = render(|out| write_arch(out, "armv7l", Arch::X86));
        assert_eq!(text, "machine=armv7l\narch=x86\n");
    }
}
