//! Architecture classification for artefact variant selection.
//!
//! The classifier is deliberately two-way: `x86_64` maps to itself and every
//! other machine identifier (ARM, 32-bit x86, anything unknown) maps to `x86`.

use serde::Serialize;
use std::fmt;

/// A coarse architecture tag used to pick URL and checksum variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arch {
    /// 64-bit x86 (`x86_64`).
    #[serde(rename = "x86_64")]
    X86_64,
    /// Every other machine, reported as `x86`.
    #[serde(rename = "x86")]
    X86,
}

impl Arch {
    /// Classify a raw machine identifier such as the `uname -m` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kibana_artefact::arch::Arch;
    ///
    /// assert_eq!(Arch::classify("x86_64"), Arch::X86_64);
    /// assert_eq!(Arch::classify("aarch64"), Arch::X86);
    /// ```
    #[must_use]
    pub fn classify(machine_identifier: &str) -> Self {
        if machine_identifier == "x86_64" {
            Self::X86_64
        } else {
            Self::X86
        }
    }

    /// Return the tag as it appears in URLs and catalog keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::X86 => "x86",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw machine identifier into an [`Arch`] tag.
///
/// Free-function form of [`Arch::classify`].
#[must_use]
pub fn classify_architecture(machine_identifier: &str) -> Arch {
    Arch::classify(machine_identifier)
}
