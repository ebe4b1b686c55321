//! Opaque checksum records stored in the catalog.
//!
//! Unlike a validated digest type, a record accepts any string. The catalog
//! values are reference data copied from upstream and are reproduced exactly,
//! whatever their length or alphabet.

/// A hex-encoded digest string, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChecksumRecord(String);

impl ChecksumRecord {
    /// Wrap a checksum string without inspecting it.
    #[must_use]
    pub fn new(checksum: impl Into<String>) -> Self {
        Self(checksum.into())
    }

    /// Return the checksum as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChecksumRecord {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
