//! The version marker file.
//!
//! A single line naming the upstream release tag the bundled icons were
//! generated from (`0.469.0`).

use crate::error::ReleaseError;
use camino::Utf8Path;
use std::fs;
use std::io::ErrorKind;

/// Default name of the version marker file.
pub const VERSION_FILE: &str = ".lucide-version";

/// Reads the current upstream tag from `path`.
pub fn read_version(path: &Utf8Path) -> Result<String, ReleaseError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReleaseError::VersionFileMissing(path.to_owned()),
        _ => ReleaseError::Io {
            path: path.to_owned(),
            source,
        },
    })?;

    let version = content.trim();
    if version.is_empty() {
        return Err(ReleaseError::VersionFileEmpty(path.to_owned()));
    }
    Ok(version.to_string())
}

/// Writes `tag` to `path`, followed by a newline.
pub fn write_version(path: &Utf8Path, tag: &str) -> Result<(), ReleaseError> {
    fs::write(path, format!("{tag}\n")).map_err(|source| ReleaseError::Io {
        path: path.to_owned(),
        source,
    })
}
