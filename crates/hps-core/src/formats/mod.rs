//! Supported model formats.
//!
//! The base formats are always openable. The exchange formats depend on
//! the optional import library and are only enabled when the viewer
//! bridge reports that capability.

use crate::document::file_extension;

/// Formats the viewer always opens.
pub const BASE_FORMATS: &[&str] = &["hsf", "stl", "obj"];

/// Formats handled by the optional exchange importer.
pub const EXCHANGE_FORMATS: &[&str] = &[
    "pdf", "prc", "u3d", "step", "jt", "iges", "ifc", "ifczip", "x_b", "x_t", "x_mt", "xmt_txt",
];

/// Whether the exchange importer is available in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportCapability {
    BaseOnly,
    Exchange,
}

/// The set of file extensions the viewer can currently open.
///
/// Membership is case-insensitive. Extensionless names and dotfiles
/// never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedExtensionSet {
    capability: ImportCapability,
}

impl SupportedExtensionSet {
    pub fn new(capability: ImportCapability) -> Self {
        Self { capability }
    }

    pub fn base_only() -> Self {
        Self::new(ImportCapability::BaseOnly)
    }

    pub fn with_exchange() -> Self {
        Self::new(ImportCapability::Exchange)
    }

    pub fn capability(&self) -> ImportCapability {
        self.capability
    }

    /// True when `file_name` has an extension in the active set.
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(ext) = file_extension(file_name) else {
            return false;
        };
        in_set(BASE_FORMATS, ext)
            || (self.capability == ImportCapability::Exchange && in_set(EXCHANGE_FORMATS, ext))
    }
}

fn in_set(set: &[&str], ext: &str) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(ext))
}
