//! The compiled-in catalog of Kibana artefact checksums.
//!
//! The table maps version → install method → architecture → checksum. It is
//! sparse: versions before 5.4.1 carry no `darwin` entry and key their
//! Windows checksum under `x64` rather than `x86`. Entries are kept in the
//! order upstream published them (newest first), and the maps built from
//! those rows on first use iterate in that same order.

use crate::checksum::ChecksumRecord;
use once_cell::sync::Lazy;
use indexmap::IndexMap;

/// One row of the compiled-in catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogRow {
    /// Kibana version, e.g. `6.2.4`.
    pub version: &'static str,
    /// Install-method tag (`release`, `windows`, `darwin`).
    pub install_method: &'static str,
    /// Architecture key (`x86_64`, `x86`, `x64`).
    pub arch: &'static str,
    /// Hex-encoded checksum, stored verbatim.
    pub checksum: &'static str,
}

const fn row(
    version: &'static str,
    install_method: &'static str,
    arch: &'static str,
    checksum: &'static str,
) -> CatalogRow {
    CatalogRow {
        version,
        install_method,
        arch,
        checksum,
    }
}

#[rustfmt::skip]
const CATALOG_ROWS: &[CatalogRow] = &[
    row("6.2.4", "release", "x86_64", "53fb5ddcb3055209f8e3dffcad62d24bdbdedbe8e2f66c1773bac4a1f8b629af"),
    row("6.2.4", "release", "x86",    "4df1c6fd3b2e41d92fe8ec850dd5253c554285d8c8cdabbefbf744e74f732345"),
    row("6.2.4", "windows", "x86",    "d9fe5dcb8d4d931317d25c16ccaf2e8dbc6464eb1dd22d081c33822d2993dab4"),
    row("6.2.4", "darwin",  "x86_64", "53fb5ddcb3055209f8e3dffcad62d24bdbdedbe8e2f66c1773bac4a1f8b629af"),
    row("5.6.5", "release", "x86_64", "d9c5b0fa82226aa2c31e91ce88fa9d48d86f0de297c2e7350b9260d70a986c25"),
    row("5.6.5", "release", "x86",    "6b3501b3efd858edb626632a22043f5242030c01bf729231df299ec743308162"),
    row("5.6.5", "windows", "x86",    "07b2c45c985eba3f3a0bae27acb0e5c423e2352d816fc62117ca50f216f0c557"),
    row("5.6.5", "darwin",  "x86_64", "e233b099f1d3a928e38066825a103cc1ae2c58c18178bfe4a954273627ce44f4"),
    row("5.6.3", "release", "x86_64", "6f3df48dabf51917252b1d99bea03a66e981812b27097645cc3cbb53281a1c71"),
    row("5.6.3", "release", "x86",    "a34e20bae6c0d3165a185919460293d0c060fe8ea94b7488cf1d73c5cff9e0f2"),
    row("5.6.3", "windows", "x86",    "81f8a9375ec3a39507753164d3b97867c3647a4ed4659065b451bec825068066"),
    row("5.6.3", "darwin",  "x86_64", "65bc363542ad29e636f1f0fec3446c489a5ab7bd333dc160a6f0d25ecfbdb057"),
    row("5.4.1", "release", "x86_64", "efab73464c6cbc90089acf9275e43c7b3c2bbe8fb62c710567ac523a65c3394b"),
    row("5.4.1", "release", "x86",    "25b309435ae4760332e2072e80a83848852245f5c91af6f72bf09771a0bd73fa"),
    row("5.4.1", "windows", "x86",    "bf88a207b5d4be62c02b83cf2d1cce14aac1a48a9feb084817b93e4690b00983"),
    row("5.4.1", "darwin",  "x86_64", "ea66827790ed6dbce241ccdee37e25f3da6ea01c0b1ca5a018032cef626c6239"),
    row("5.4.0", "release", "x86_64", "58838dcb5b3195455e1eb05926fed27d882a3476370facfc35d39d837940b1bc"),
    row("5.4.0", "release", "x86",    "fbeda3f125cd95cc914c1eb49f65313eb55ce65c9300f231f2d050f4c6bbb65f"),
    row("5.4.0", "windows", "x64",    "9c3c36c042962794b1eb9f45a585302f3eb4c01aecca7c06fb53097b7e7d2852"),
    row("5.3.0", "release", "x86_64", "f31369c32d655370f0e51290018004cfbc54e2d648f0f79dba88e36b4d6cce6f"),
    row("5.3.0", "release", "x86",    "eddc77334032ed30f98289715781d01e7677d598cf4a3ad5595618cc057a8bfc"),
    row("5.3.0", "windows", "x64",    "56c5fbd5767dea313ab11489cfed6da063677f9ad38fe9c0420535a46bfdbdaf"),
    row("5.2.2", "release", "x86_64", "9c7c526ce286da7f63aed9fb9f9d752ec182ff16bf374c55e55e5a0536a33563"),
    row("5.2.2", "release", "x86",    "de0421728aca00e9d4114b45ad5519b843b700006eb0795fcc2df4371d6baa1d"),
    row("5.2.2", "windows", "x64",    "8d6435aa6cfef1a8ce8d4a84361139d0ea3848abfe87283765b4da4fbaefdd3f"),
    row("5.2.1", "release", "x86_64", "82f06fc998385f08eac1c26bb0a48b29a34d179fdb7d0e8be216b35782f12bff"),
    row("5.2.1", "release", "x86",    "c3f27b73e29a9b51a89b9b58798a0ea087df29978424255acb441a8b3e3540bf"),
    row("5.2.1", "windows", "x64",    "8753db954a89a7a5c19a2c93886b523d1f8054bd31ce24c772bd873555a949d8"),
    row("5.2.0", "release", "x86_64", "729af8ab00f719f2038f6c499e508744b274487756e0214b660535ebead6f28a"),
    row("5.2.0", "release", "x86",    "9df75d2dc05937064f1ec905edc705ab1a83e8aaddef6b2fa90b2826f6cc2ea4"),
    row("5.2.0", "windows", "x64",    "bd1be9758b11b071bc033e9ed996598f4da6cdb18b28c475993c429f1c17db31"),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::from_rows(CATALOG_ROWS));

/// Checksum records for one install method, keyed by architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodEntry {
    archs: IndexMap<String, ChecksumRecord>,
}

impl MethodEntry {
    /// Look up the checksum record for an architecture key.
    #[must_use]
    pub fn checksum(&self, arch: &str) -> Option<&ChecksumRecord> {
        self.archs.get(arch)
    }

    /// Iterate over `(arch, checksum)` pairs in table order.
    pub fn archs(&self) -> impl Iterator<Item = (&str, &ChecksumRecord)> {
        self.archs
            .iter()
            .map(|(arch, record)| (arch.as_str(), record))
    }
}

/// The install methods published for one version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionEntry {
    methods: IndexMap<String, MethodEntry>,
}

impl VersionEntry {
    /// Look up the entry for an install-method tag.
    #[must_use]
    pub fn method(&self, install_method: &str) -> Option<&MethodEntry> {
        self.methods.get(install_method)
    }

    /// Iterate over `(install_method, entry)` pairs in table order.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &MethodEntry)> {
        self.methods
            .iter()
            .map(|(method, entry)| (method.as_str(), entry))
    }
}

/// A version → method → arch → checksum table.
///
/// The process-wide instance is [`Catalog::builtin`]; other instances exist
/// for callers and tests that need a different table.
///
/// # Examples
///
/// ```
/// use kibana_artefact::catalog::Catalog;
///
/// let record = Catalog::builtin()
///     .version("6.2.4")
///     .and_then(|entry| entry.method("release"))
///     .and_then(|method| method.checksum("x86_64"));
/// assert!(record.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    versions: IndexMap<String, VersionEntry>,
}

impl Catalog {
    /// Return the compiled-in catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Return the raw rows the compiled-in catalog is built from, newest
    /// version first.
    #[must_use]
    pub const fn builtin_rows() -> &'static [CatalogRow] {
        CATALOG_ROWS
    }

    /// Build a catalog from table rows.
    ///
    /// A later row with the same (version, method, arch) key replaces the
    /// earlier one in place.
    #[must_use]
    pub fn from_rows(rows: &[CatalogRow]) -> Self {
        let mut catalog = Self::default();
        for entry in rows {
            catalog.insert(
                entry.version,
                entry.install_method,
                entry.arch,
                ChecksumRecord::from(entry.checksum),
            );
        }
        catalog
    }

    /// Insert a checksum record, returning any record it replaced.
    pub fn insert(
        &mut self,
        version: &str,
        install_method: &str,
        arch: &str,
        record: ChecksumRecord,
    ) -> Option<ChecksumRecord> {
        self.versions
            .entry(version.to_owned())
            .or_default()
            .methods
            .entry(install_method.to_owned())
            .or_default()
            .archs
            .insert(arch.to_owned(), record)
    }

    /// Look up the entry for a version.
    #[must_use]
    pub fn version(&self, version: &str) -> Option<&VersionEntry> {
        self.versions.get(version)
    }

    /// Iterate over `(version, entry)` pairs in table order.
    ///
    /// Versions are never sorted, so `5.10.0` stays wherever it was inserted.
    pub fn versions(&self) -> impl Iterator<Item = (&str, &VersionEntry)> {
        self.versions
            .iter()
            .map(|(version, entry)| (version.as_str(), entry))
    }

    /// Return the total number of checksum records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions
            .values()
            .flat_map(|entry| entry.methods.values())
            .map(|method| method.archs.len())
            .sum()
    }

    /// Return whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn builtin_rows_have_unique_keys() {
        assert_eq!(Catalog::builtin().len(), CATALOG_ROWS.len());
    }

    #[test]
    fn builtin_lists_every_version() {
        let versions: Vec<&str> = Catalog::builtin()
            .versions()
            .map(|(version, _)| version)
            .collect();
        assert_eq!(
            versions,
            [
                "6.2.4", "5.6.5", "5.6.3", "5.4.1", "5.4.0", "5.3.0", "5.2.2", "5.2.1", "5.2.0"
            ]
        );
    }

    #[test]
    fn every_builtin_row_is_reachable() {
        let catalog = Catalog::builtin();
        for entry in CATALOG_ROWS {
            let record = catalog
                .version(entry.version)
                .and_then(|version| version.method(entry.install_method))
                .and_then(|method| method.checksum(entry.arch))
                .expect("row should be present");
            assert_eq!(record.as_str(), entry.checksum);
        }
    }

    #[test]
    fn builtin_checksums_are_untouched() {
        for entry in CATALOG_ROWS {
            assert_eq!(entry.checksum.len(), 64, "row {entry:?}");
        }
    }

    #[rstest]
    #[case::old_windows_uses_x64("5.4.0", "windows", "x64", true)]
    #[case::old_windows_has_no_x86("5.4.0", "windows", "x86", false)]
    #[case::new_windows_uses_x86("5.4.1", "windows", "x86", true)]
    #[case::old_has_no_darwin("5.3.0", "darwin", "x86_64", false)]
    #[case::new_has_darwin("5.6.5", "darwin", "x86_64", true)]
    #[case::darwin_has_no_x86("6.2.4", "darwin", "x86", false)]
    fn table_is_sparse(
        #[case] version: &str,
        #[case] method: &str,
        #[case] arch: &str,
        #[case] present: bool,
    ) {
        let found = Catalog::builtin()
            .version(version)
            .and_then(|entry| entry.method(method))
            .and_then(|entry| entry.checksum(arch))
            .is_some();
        assert_eq!(found, present);
    }

    #[test]
    fn insert_replaces_duplicate_key() {
        let mut catalog = Catalog::default();
        assert!(catalog.is_empty());
        let first = catalog.insert("1.0.0", "release", "x86", ChecksumRecord::new("aa"));
        let second = catalog.insert("1.0.0", "release", "x86", ChecksumRecord::new("bb"));

        assert_eq!(first, None);
        assert_eq!(second, Some(ChecksumRecord::new("aa")));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn insert_groups_by_version_and_method() {
        let catalog = Catalog::from_rows(&[
            row("1.0.0", "release", "x86_64", "aa"),
            row("1.0.0", "release", "x86", "bb"),
            row("1.0.0", "windows", "x86", "cc"),
            row("2.0.0", "release", "x86", "dd"),
        ]);

        assert_eq!(catalog.versions().count(), 2);
        let v1 = catalog.version("1.0.0").expect("version present");
        let methods: Vec<&str> = v1.methods().map(|(method, _)| method).collect();
        assert_eq!(methods, ["release", "windows"]);
        let release = v1.method("release").expect("release present");
        let archs: Vec<&str> = release.archs().map(|(arch, _)| arch).collect();
        assert_eq!(archs, ["x86_64", "x86"]);
    }

    #[test]
    fn versions_follow_table_order() {
        let listed: Vec<&str> = Catalog::builtin()
            .versions()
            .map(|(version, _)| version)
            .collect();
        let mut table: Vec<&str> = Vec::new();
        for entry in Catalog::builtin_rows() {
            if !table.contains(&entry.version) {
                table.push(entry.version);
            }
        }
        assert_eq!(listed, table);
    }

    #[test]
    fn versions_are_not_sorted_as_strings() {
        let catalog = Catalog::from_rows(&[
            row("5.2.0", "release", "x86", "aa"),
            row("5.10.0", "release", "x86", "bb"),
        ]);

        let listed: Vec<&str> = catalog.versions().map(|(version, _)| version).collect();

        assert_eq!(listed, ["5.2.0", "5.10.0"]);
    }

    #[test]
    fn builtin_methods_follow_table_order() {
        let newest = Catalog::builtin().version("6.2.4").expect("6.2.4 present");
        let methods: Vec<&str> = newest.methods().map(|(method, _)| method).collect();
        assert_eq!(methods, ["release", "windows", "darwin"]);
    }
}
