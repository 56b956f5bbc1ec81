//! Generation error types.

use camino::Utf8PathBuf;
use lucide_source::SourceError;
use smol_str::SmolStr;
use thiserror::Error;

/// An error that aborts a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// One icon file could not be processed.
    #[error("{path}: {source}")]
    Icon {
        /// The SVG file that failed.
        path: Utf8PathBuf,
        /// What went wrong with it.
        #[source]
        source: SourceError,
    },

    /// Two icons or aliases resolve to the same name or identifier.
    #[error("duplicate {kind} {name:?}: declared by both {first} and {second}")]
    DuplicateName {
        /// What collided (`name` or `identifier`).
        kind: &'static str,
        /// The colliding value.
        name: SmolStr,
        /// The icon that declared it first.
        first: SmolStr,
        /// The icon that declared it again.
        second: SmolStr,
    },

    /// The source directory could not be listed.
    #[error("failed to list {path}: {source}")]
    ListDirectory {
        /// The source directory.
        path: Utf8PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A directory entry has a non UTF-8 path.
    #[error("non UTF-8 path in icon directory: {0}")]
    NonUtf8Path(std::path::PathBuf),

    /// The output artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The output path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
