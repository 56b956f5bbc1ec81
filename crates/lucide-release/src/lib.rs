//! Upstream release tracking for lucide-rs.
//!
//! The pieces the update command is made of:
//! - [`read_version`] / [`write_version`] for the `.lucide-version` marker
//! - [`Changelog`] for adding entries, version links and reading notes
//! - [`ReleaseClient`] for the GitHub "latest release" endpoint
//! - [`download_and_extract`] for unpacking a release's icon archive

mod changelog;
mod client;
mod download;
mod error;
mod version;

pub use changelog::{next_minor_version, Changelog, ChangelogEntry, CHANGELOG_FILE};
pub use client::{Release, ReleaseAsset, ReleaseClient, GITHUB_API, LUCIDE_REPOSITORY};
pub use download::{download_and_extract, extract_icons};
pub use error::ReleaseError;
pub use version::{read_version, write_version, VERSION_FILE};
