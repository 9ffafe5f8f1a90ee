//! Build-time utilities shared across the fathom-setup build scripts.
//!
//! Houses the package version resolution logic: a fixed base version string,
//! optionally enriched with the short revision token reported by
//! `git describe`, and the writer for the generated version artifact the
//! payload package reads at start-up.

use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Comment line written at the top of the generated version artifact.
pub const VERSION_FILE_BANNER: &str = "# This file is auto-generated by fathom-setup; do not edit.";

/// Appends the trailing revision token of a `git describe` tag to a base
/// version.
///
/// The token is everything after the last dash of the trimmed tag, so a tag
/// such as `v1.2-3-gabcd` contributes `gabcd`. A blank tag leaves the base
/// version untouched; no partial suffix is ever emitted.
///
/// # Examples
/// ```
/// use fathom_build_util::append_revision;
///
/// assert_eq!(append_revision("0.6.1b", "v1.2-3-gabcd"), "0.6.1b-gabcd");
/// assert_eq!(append_revision("0.6.1b", "   "), "0.6.1b");
/// ```
#[must_use]
pub fn append_revision(base: &str, tag: &str) -> String {
    let token = tag.trim().rsplit('-').next().unwrap_or_default();
    if token.is_empty() {
        return base.to_owned();
    }
    format!("{base}-{token}")
}

/// Queries `git describe` in the given repository directory.
///
/// Returns `None` for any failure: the binary is missing, the directory does
/// not exist, the directory is not a repository, or the output is not valid
/// UTF-8. Revision lookup is an optional enrichment, so none of these are
/// surfaced to the caller.
#[must_use]
pub fn git_describe_in(repository: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("describe")
        .current_dir(repository)
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let tag = String::from_utf8(output.stdout).ok()?;
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    Some(tag.to_owned())
}

/// Resolves the package version for a source checkout.
///
/// When the checkout carries revision information the short revision token is
/// appended to `base`; otherwise `base` is returned verbatim.
#[must_use]
pub fn resolve_version_in(base: &str, repository: &Path) -> String {
    match git_describe_in(repository) {
        Some(tag) => append_revision(base, &tag),
        None => base.to_owned(),
    }
}

/// Writes the generated version artifact, replacing any previous content.
///
/// The artifact is exactly two lines: the auto-generated banner comment and a
/// single `version = "..."` assignment. Missing parent directories are
/// created.
///
/// # Errors
///
/// Returns the underlying IO error when the directory or file cannot be
/// written.
pub fn write_version_file(path: &Path, version: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{VERSION_FILE_BANNER}\nversion = \"{version}\"\n"))
}
