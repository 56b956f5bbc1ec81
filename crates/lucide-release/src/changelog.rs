//! Changelog maintenance.
//!
//! The changelog follows the Keep a Changelog layout: a six-line header,
//! then one `## [version] - date` section per release, newest first, then a
//! `---` separator followed by version links.

use crate::error::ReleaseError;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

/// Default changelog file name.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Line index new entries are inserted at, just below the header.
const INSERT_LINE: usize = 6;

static VERSION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## \[(v\d+\.\d+\.\d+)\]").expect("version header pattern is valid")
});

static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$").expect("version tag pattern is valid"));

/// One changelog section describing an icon update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// Section title: a version (`v0.5.0`) or `Unreleased`.
    pub version: String,
    /// Date printed next to the title.
    pub date: NaiveDate,
    /// Upstream tag before the update.
    pub current_tag: String,
    /// Upstream tag after the update.
    pub new_tag: String,
    /// Icons present after the update but not before.
    pub icons_added: usize,
    /// Icons present before the update but not after.
    pub icons_removed: usize,
}

impl ChangelogEntry {
    /// Renders the entry, ending with a blank line.
    pub fn format(&self) -> String {
        let mut out = format!(
            "## [{}] - {}\n### Changed\n- Updated Lucide icons from {} to {}\n",
            self.version,
            self.date.format("%Y-%m-%d"),
            self.current_tag,
            self.new_tag
        );
        if self.icons_added > 0 {
            out.push_str(&format!("- Added {} new icon(s)\n", self.icons_added));
        }
        if self.icons_removed > 0 {
            out.push_str(&format!("- Removed {} icon(s)\n", self.icons_removed));
        }
        out
    }
}

/// Reads and edits a changelog file.
#[derive(Debug, Clone)]
pub struct Changelog {
    path: Utf8PathBuf,
    project: String,
}

impl Changelog {
    /// Creates a manager for the changelog at `path`.
    ///
    /// `project` is the `owner/repo` used in version links.
    pub fn new(path: impl Into<Utf8PathBuf>, project: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            project: project.into(),
        }
    }

    /// Path of the changelog file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Inserts `entry` above the newest existing section.
    pub fn add_entry(&self, entry: &ChangelogEntry) -> Result<(), ReleaseError> {
        let content = self.read()?;
        let lines: Vec<&str> = content.split('\n').collect();
        if lines.len() < INSERT_LINE {
            return Err(ReleaseError::ChangelogFormat("too few lines"));
        }

        let text = entry.format();
        let mut updated: Vec<&str> = Vec::with_capacity(lines.len() + 8);
        updated.extend_from_slice(&lines[..INSERT_LINE]);
        updated.extend(text.split('\n'));
        updated.extend_from_slice(&lines[INSERT_LINE..]);

        self.write(&updated.join("\n"))?;
        tracing::info!(version = %entry.version, path = %self.path, "added changelog entry");
        Ok(())
    }

    /// Adds a release link for `version` below the `---` separator, or
    /// replaces the existing one.
    pub fn add_version_link(&self, version: &str) -> Result<(), ReleaseError> {
        let content = self.read()?;
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

        let separator = lines
            .iter()
            .position(|line| line.trim() == "---")
            .ok_or(ReleaseError::ChangelogFormat("separator '---' not found"))?;

        let link = format!(
            "[{version}]: https://github.com/{}/releases/tag/{version}",
            self.project
        );
        let marker = format!("[{version}]:");

        if let Some(existing) = lines[separator + 1..]
            .iter()
            .position(|line| line.contains(&marker))
        {
            lines[separator + 1 + existing] = link;
        } else {
            // The line right after the separator is the blank spacer.
            let rest_start = (separator + 2).min(lines.len());
            let rest = lines.split_off(rest_start);
            lines.truncate(separator + 1);
            lines.push(String::new());
            lines.push(link);
            lines.extend(rest);
        }

        self.write(&lines.join("\n"))
    }

    /// Returns the topmost `## [vX.Y.Z]` version.
    pub fn latest_version(&self) -> Result<String, ReleaseError> {
        let content = self.read()?;
        content
            .split('\n')
            .find_map(|line| VERSION_HEADER.captures(line))
            .map(|caps| caps[1].to_string())
            .ok_or(ReleaseError::ChangelogFormat("no version found"))
    }

    /// Returns the body of the section for `version`, without its header
    /// and without trailing blank lines.
    pub fn release_notes(&self, version: &str) -> Result<String, ReleaseError> {
        let content = self.read()?;
        let header = format!("## [{version}]");

        let mut lines = content.split('\n');
        if !lines.by_ref().any(|line| line.starts_with(&header)) {
            return Err(ReleaseError::VersionNotFound(version.to_string()));
        }

        let mut notes: Vec<&str> = lines
            .take_while(|line| !line.starts_with("## [") && !line.starts_with("---"))
            .collect();
        while notes.last().is_some_and(|line| line.trim().is_empty()) {
            notes.pop();
        }
        Ok(notes.join("\n"))
    }

    fn read(&self) -> Result<String, ReleaseError> {
        fs::read_to_string(&self.path).map_err(|source| ReleaseError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, content: &str) -> Result<(), ReleaseError> {
        fs::write(&self.path, content).map_err(|source| ReleaseError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Returns the next minor version after `current` (`v0.4.2` -> `v0.5.0`).
///
/// With no current version the first release is `v0.1.0`.
pub fn next_minor_version(current: Option<&str>) -> Result<String, ReleaseError> {
    let Some(current) = current else {
        return Ok("v0.1.0".to_string());
    };

    let invalid = || ReleaseError::InvalidVersion(current.to_string());
    let caps = VERSION_TAG.captures(current.trim()).ok_or_else(invalid)?;
    let major: u64 = caps[1].parse().map_err(|_| invalid())?;
    let minor: u64 = caps[2].parse().map_err(|_| invalid())?;

    Ok(format!("v{major}.{}.0", minor + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHANGELOG: &str = "# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/).

## [v0.3.0] - 2025-01-10
### Changed
- Updated Lucide icons from 0.460.0 to 0.469.0

## [v0.2.0] - 2024-12-01
### Added
- Initial release

---

[v0.3.0]: https://github.com/acme/lucide-rs/releases/tag/v0.3.0
[v0.2.0]: https://github.com/acme/lucide-rs/releases/tag/v0.2.0
";

    fn changelog(content: &str) -> (tempfile::TempDir, Changelog) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join(CHANGELOG_FILE)).unwrap();
        fs::write(&path, content).unwrap();
        (dir, Changelog::new(path, "acme/lucide-rs"))
    }

    fn entry(added: usize, removed: usize) -> ChangelogEntry {
        ChangelogEntry {
            version: "Unreleased".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            current_tag: "0.469.0".to_string(),
            new_tag: "0.470.0".to_string(),
            icons_added: added,
            icons_removed: removed,
        }
    }

    #[test]
    fn test_format_entry_omits_zero_counts() {
        assert_eq!(
            entry(0, 0).format(),
            "## [Unreleased] - 2025-02-03\n### Changed\n- Updated Lucide icons from 0.469.0 to 0.470.0\n"
        );
        assert_eq!(
            entry(3, 1).format(),
            "## [Unreleased] - 2025-02-03\n### Changed\n- Updated Lucide icons from 0.469.0 to 0.470.0\n- Added 3 new icon(s)\n- Removed 1 icon(s)\n"
        );
    }

    #[test]
    fn test_add_entry_inserts_below_header() {
        let (_dir, changelog) = changelog(CHANGELOG);
        changelog.add_entry(&entry(2, 0)).unwrap();

        let content = fs::read_to_string(changelog.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[6], "## [Unreleased] - 2025-02-03");
        assert_eq!(lines[9], "- Added 2 new icon(s)");
        assert_eq!(lines[10], "");
        assert_eq!(lines[11], "## [v0.3.0] - 2025-01-10");
    }

    #[test]
    fn test_add_entry_short_file() {
        let (_dir, changelog) = changelog("# Changelog\n\nshort");
        let err = changelog.add_entry(&entry(0, 0)).unwrap_err();
        assert!(matches!(err, ReleaseError::ChangelogFormat(_)));
    }

    #[test]
    fn test_latest_version() {
        let (_dir, changelog) = changelog(CHANGELOG);
        assert_eq!(changelog.latest_version().unwrap(), "v0.3.0");
    }

    #[test]
    fn test_latest_version_skips_unreleased() {
        let (_dir, changelog) = changelog(CHANGELOG);
        changelog.add_entry(&entry(0, 0)).unwrap();
        assert_eq!(changelog.latest_version().unwrap(), "v0.3.0");
    }

    #[test]
    fn test_release_notes() {
        let (_dir, changelog) = changelog(CHANGELOG);
        assert_eq!(
            changelog.release_notes("v0.3.0").unwrap(),
            "### Changed\n- Updated Lucide icons from 0.460.0 to 0.469.0"
        );
        assert_eq!(
            changelog.release_notes("v0.2.0").unwrap(),
            "### Added\n- Initial release"
        );
    }

    #[test]
    fn test_release_notes_unknown_version() {
        let (_dir, changelog) = changelog(CHANGELOG);
        let err = changelog.release_notes("v9.9.9").unwrap_err();
        assert!(matches!(err, ReleaseError::VersionNotFound(v) if v == "v9.9.9"));
    }

    #[test]
    fn test_add_version_link_new() {
        let (_dir, changelog) = changelog(CHANGELOG);
        changelog.add_version_link("v0.4.0").unwrap();

        let content = fs::read_to_string(changelog.path()).unwrap();
        assert!(content.contains(
            "---\n\n[v0.4.0]: https://github.com/acme/lucide-rs/releases/tag/v0.4.0\n[v0.3.0]:"
        ));
    }

    #[test]
    fn test_add_version_link_replaces_existing() {
        let stale = CHANGELOG.replace(
            "[v0.3.0]: https://github.com/acme/lucide-rs/releases/tag/v0.3.0",
            "[v0.3.0]: https://example.com/old",
        );
        let (_dir, changelog) = changelog(&stale);
        changelog.add_version_link("v0.3.0").unwrap();

        let content = fs::read_to_string(changelog.path()).unwrap();
        assert!(!content.contains("example.com"));
        assert_eq!(content.matches("[v0.3.0]:").count(), 1);
    }

    #[test]
    fn test_add_version_link_without_separator() {
        let (_dir, changelog) = changelog("# Changelog\n");
        assert!(matches!(
            changelog.add_version_link("v0.1.0"),
            Err(ReleaseError::ChangelogFormat(_))
        ));
    }

    #[test]
    fn test_next_minor_version() {
        assert_eq!(next_minor_version(None).unwrap(), "v0.1.0");
        assert_eq!(next_minor_version(Some("v0.4.2")).unwrap(), "v0.5.0");
        assert_eq!(next_minor_version(Some("v1.9.0")).unwrap(), "v1.10.0");
        assert!(matches!(
            next_minor_version(Some("0.4.2")),
            Err(ReleaseError::InvalidVersion(_))
        ));
    }
}
