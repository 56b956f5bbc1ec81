//! Integration tests for building icon records from a source directory.

use camino::{Utf8Path, Utf8PathBuf};
use lucide_source::{process_icon, SourceError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const TEST_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
  <circle cx="12" cy="12" r="10" />
</svg>"#;

fn source_dir() -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("temp dir is not UTF-8");
    (dir, path)
}

fn write(dir: &Utf8Path, file: &str, content: &str) -> Utf8PathBuf {
    let path = dir.join(file);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_process_icon_without_metadata() {
    let (_guard, dir) = source_dir();
    let svg_path = write(&dir, "test-icon.svg", TEST_SVG);

    let icon = process_icon(&svg_path, &dir).unwrap();

    assert_eq!(icon.name, "test-icon");
    assert_eq!(icon.pascal_name, "TestIcon");
    assert_eq!(icon.paths, r#"<circle cx="12" cy="12" r="10" />"#);
    assert!(icon.aliases.is_empty());
}

#[test]
fn test_process_icon_with_aliases() {
    let (_guard, dir) = source_dir();
    let svg_path = write(&dir, "test-icon.svg", TEST_SVG);
    write(
        &dir,
        "test-icon.json",
        r#"{
  "aliases": [
    {
      "name": "old-name",
      "deprecationReason": "Renamed for clarity",
      "deprecated": true
    },
    {
      "name": "another-alias",
      "deprecated": false
    }
  ]
}"#,
    );

    let icon = process_icon(&svg_path, &dir).unwrap();
    assert_eq!(icon.aliases.len(), 2);

    let first = &icon.aliases[0];
    assert_eq!(first.name, "old-name");
    assert_eq!(first.pascal_name, "OldName");
    assert_eq!(first.target_name, "test-icon");
    assert_eq!(first.target_pascal_name, "TestIcon");
    assert!(first.deprecated);
    assert_eq!(first.deprecation_reason, "Renamed for clarity");

    let second = &icon.aliases[1];
    assert_eq!(second.name, "another-alias");
    assert_eq!(second.pascal_name, "AnotherAlias");
    assert_eq!(second.target_name, "test-icon");
    assert!(!second.deprecated);
    assert_eq!(second.deprecation_reason, "");
}

#[test]
fn test_malformed_metadata_fails() {
    let (_guard, dir) = source_dir();
    let svg_path = write(&dir, "test-icon.svg", TEST_SVG);
    write(&dir, "test-icon.json", "{invalid json}");

    let err = process_icon(&svg_path, &dir).unwrap_err();
    assert!(matches!(err, SourceError::MalformedMetadata { .. }));
}

#[test]
fn test_malformed_svg_fails() {
    let (_guard, dir) = source_dir();
    let svg_path = write(&dir, "broken.svg", "<svg><circle r=\"1\" />");

    let err = process_icon(&svg_path, &dir).unwrap_err();
    assert!(matches!(err, SourceError::MalformedSvg(_)));
}

#[test]
fn test_unreadable_svg_is_io_error() {
    let (_guard, dir) = source_dir();
    let missing = dir.join("missing.svg");

    let err = process_icon(&missing, &dir).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}

#[test]
fn test_paths_never_contain_svg_tag() {
    let (_guard, dir) = source_dir();
    let svg_path = write(
        &dir,
        "circle-x.svg",
        r#"<svg
  xmlns="http://www.w3.org/2000/svg"
  width="24"
  height="24"
  viewBox="0 0 24 24"
>
  <circle cx="12" cy="12" r="10" />
  <path d="m15 9-6 6" />
  <path d="m9 9 6 6" />
</svg>
"#,
    );

    let icon = process_icon(&svg_path, &dir).unwrap();
    assert_eq!(icon.pascal_name, "CircleX");
    assert!(!icon.paths.is_empty());
    assert!(!icon.paths.contains("<svg"));
}
