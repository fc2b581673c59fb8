//! Extension allowlist for release artifacts.
//!
//! This gate is consulted per file right before a download is attempted. It is kept apart
//! from [`crate::listing::filter_files`], which only drops directory-like links.

/// Suffixes that may be downloaded, compared against the lowercased final extension.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".asc",
    ".asc-ma1",
    ".asc-pierov",
    ".apk",
    ".bspatch",
    ".dmg",
    ".exe",
    ".gz",
    ".idsig",
    ".mar",
    ".txt",
    ".zip",
    ".xz",
];

/// Lowercased final extension of `file_name`, including the leading dot.
///
/// Only the last path element is looked at. Returns an empty string when it has no dot.
pub fn extension_of(file_name: &str) -> String {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    base.rfind('.')
        .map(|dot| base[dot..].to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn is_allowed(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}
