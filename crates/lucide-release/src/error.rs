//! Release error types.

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error raised while tracking or fetching upstream releases.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The version marker file does not exist.
    #[error("version file not found: {0}")]
    VersionFileMissing(Utf8PathBuf),

    /// The version marker file holds only whitespace.
    #[error("version file is empty: {0}")]
    VersionFileEmpty(Utf8PathBuf),

    /// A file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        /// The file involved.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A temporary download file could not be created or written.
    #[error("temporary file error: {0}")]
    TempFile(#[source] std::io::Error),

    /// The changelog does not have the expected layout.
    #[error("changelog format unexpected: {0}")]
    ChangelogFormat(&'static str),

    /// The changelog has no section for the requested version.
    #[error("version {0} not found in changelog")]
    VersionNotFound(String),

    /// A version tag is not of the form `vX.Y.Z`.
    #[error("invalid version format: {0}")]
    InvalidVersion(String),

    /// The HTTP request failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned {status}")]
    HttpStatus {
        /// The requested URL.
        url: String,
        /// The response status.
        status: reqwest::StatusCode,
    },

    /// The release has no `lucide-icons-*.zip` asset.
    #[error("icons asset not found in release {0}")]
    AssetNotFound(String),

    /// The release asset has no download URL.
    #[error("asset {0} has no download URL")]
    MissingDownloadUrl(String),

    /// The downloaded archive could not be read.
    #[error("invalid icon archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}
