//! Catalog entries and file-name helpers.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// The two fixed logical roots a catalog entry can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryRoot {
    /// Bundled read-only content, materialized once into the sandbox.
    Samples,
    /// The writable user area holding imported and downloaded files.
    MyDocuments,
}

/// One openable file discovered by a catalog scan.
///
/// Entries are derived entirely from filesystem state and rebuilt on each
/// scan; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    pub path: PathBuf,
    pub display_name: String,
    pub size_bytes: u64,
    /// Size rendered for the listing row, e.g. `"1.5 KB"`.
    pub readable_size: String,
    /// Sibling `.png` the listing shows as a thumbnail when it exists.
    /// Whether it exists is the listing's concern, not the catalog's.
    pub preview_image_path: Option<PathBuf>,
    pub root: DirectoryRoot,
}

impl DocumentEntry {
    pub fn new(path: PathBuf, display_name: String, size_bytes: u64, root: DirectoryRoot) -> Self {
        let readable_size = readable_file_size(size_bytes.min(i64::MAX as u64) as i64);
        let preview_image_path = preview_image_path(&path);
        Self {
            path,
            display_name,
            size_bytes,
            readable_size,
            preview_image_path,
            root,
        }
    }
}

/// Extension of a file name, without the dot.
///
/// Extensionless names and dotfiles have no extension.
pub fn file_extension(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// Path of the preview image for a document: the same path with its
/// extension replaced by `.png`.
pub fn preview_image_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    file_extension(name)?;
    Some(path.with_extension("png"))
}

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Renders a byte count with base-1024 units, at most one fractional
/// digit and thousands separators. Zero or negative sizes render as `"0"`.
pub fn readable_file_size(size: i64) -> String {
    if size <= 0 {
        return "0".to_string();
    }
    // Largest unit where the value is still >= 1.
    let mut group = 0;
    let mut scaled = size;
    while scaled >= 1024 && group < SIZE_UNITS.len() - 1 {
        scaled /= 1024;
        group += 1;
    }
    let value = size as f64 / 1024f64.powi(group as i32);
    format!("{} {}", format_grouped(value), SIZE_UNITS[group])
}

fn format_grouped(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let int_part = rounded.trunc() as i64;
    let tenth = ((rounded - rounded.trunc()) * 10.0).round() as i64;
    let grouped = group_thousands(int_part);
    if tenth == 0 {
        grouped
    } else {
        format!("{grouped}.{tenth}")
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}
