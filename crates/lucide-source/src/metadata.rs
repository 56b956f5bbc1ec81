//! Sidecar metadata reading.
//!
//! Upstream ships a `<name>.json` file next to most icons. Only the alias
//! list matters here; tags, categories and contributors are ignored.

use crate::error::SourceError;
use camino::Utf8Path;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

/// Parsed contents of an icon's sidecar file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Alternate names for the icon, in declaration order.
    #[serde(default)]
    pub aliases: Vec<AliasEntry>,
}

/// One alias declared in a sidecar file.
///
/// Older upstream releases list aliases as bare strings; newer ones use
/// objects with deprecation data. Both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAlias")]
pub struct AliasEntry {
    /// The alias name.
    pub name: String,
    /// Whether the alias is deprecated.
    pub deprecated: bool,
    /// Free-text reason, empty unless deprecated.
    pub deprecation_reason: String,
}

impl AliasEntry {
    /// Creates a non-deprecated alias entry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deprecated: false,
            deprecation_reason: String::new(),
        }
    }

    /// Marks the entry as deprecated with a reason.
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecated = true;
        self.deprecation_reason = reason.into();
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAlias {
    Name(String),
    #[serde(rename_all = "camelCase")]
    Full {
        name: String,
        #[serde(default)]
        deprecated: bool,
        #[serde(default)]
        deprecation_reason: String,
    },
}

impl From<RawAlias> for AliasEntry {
    fn from(raw: RawAlias) -> Self {
        match raw {
            RawAlias::Name(name) => AliasEntry::new(name),
            RawAlias::Full {
                name,
                deprecated,
                deprecation_reason,
            } => AliasEntry {
                name,
                deprecated,
                deprecation_reason: if deprecated {
                    deprecation_reason
                } else {
                    String::new()
                },
            },
        }
    }
}

impl Metadata {
    /// Parses metadata from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Reads a sidecar metadata file.
///
/// A missing file yields [`SourceError::NotFound`] so callers can tell
/// "absent" apart from "unreadable" ([`SourceError::Io`]) and "unparsable"
/// ([`SourceError::MalformedMetadata`]).
pub fn read_metadata(path: &Utf8Path) -> Result<Metadata, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_owned()),
        _ => SourceError::Io {
            path: path.to_owned(),
            source,
        },
    })?;

    Metadata::from_json(&content).map_err(|source| SourceError::MalformedMetadata {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_temp(dir: &tempfile::TempDir, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join("test.json")).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_metadata_with_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            r#"{
  "aliases": [
    {
      "name": "test-alias",
      "deprecated": true
    }
  ]
}"#,
        );

        let metadata = read_metadata(&path).unwrap();
        assert_eq!(metadata.aliases.len(), 1);
        assert!(metadata.aliases[0].deprecated);
    }

    #[test]
    fn test_metadata_without_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, r#"{"tags": ["test"]}"#);

        let metadata = read_metadata(&path).unwrap();
        assert!(metadata.aliases.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "{invalid json}");

        let err = read_metadata(&path).unwrap_err();
        assert!(matches!(err, SourceError::MalformedMetadata { .. }));
    }

    #[test]
    fn test_wrong_alias_shape_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, r#"{"aliases": [{"deprecated": true}]}"#);

        let err = read_metadata(&path).unwrap_err();
        assert!(matches!(err, SourceError::MalformedMetadata { .. }));
    }

    #[test]
    fn test_file_not_found() {
        let err = read_metadata(Utf8Path::new("/nonexistent/file.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_string_aliases() {
        let metadata = Metadata::from_json(r#"{"aliases": ["x-circle", "cancel"]}"#).unwrap();
        assert_eq!(
            metadata.aliases,
            vec![AliasEntry::new("x-circle"), AliasEntry::new("cancel")]
        );
    }

    #[test]
    fn test_reason_dropped_when_not_deprecated() {
        let metadata = Metadata::from_json(
            r#"{"aliases": [{"name": "a", "deprecated": false, "deprecationReason": "stale"}]}"#,
        )
        .unwrap();
        assert_eq!(metadata.aliases[0].deprecation_reason, "");
    }
}
