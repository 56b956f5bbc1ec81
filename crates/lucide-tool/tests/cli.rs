//! End-to-end tests for the `lucide-tool` binary.
//!
//! Each test builds a throwaway workspace in a temp directory and runs the
//! binary against it with `--workspace`. Nothing here touches the network.

use camino::{Utf8Path, Utf8PathBuf};
use pretty_assertions::assert_eq;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const BOX_SVG: &str = r#"<svg
  xmlns="http://www.w3.org/2000/svg"
  width="24"
  height="24"
  viewBox="0 0 24 24"
  fill="none"
  stroke="currentColor"
  stroke-width="2"
  stroke-linecap="round"
  stroke-linejoin="round"
>
  <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" />
  <path d="m3.3 7 8.7 5 8.7-5" />
  <path d="M12 22V12" />
</svg>
"#;

const MENU_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <line x1="4" x2="20" y1="12" y2="12" />
  <line x1="4" x2="20" y1="6" y2="6" />
  <line x1="4" x2="20" y1="18" y2="18" />
</svg>
"#;

const MENU_JSON: &str = r#"{
  "tags": ["bars", "navigation", "hamburger"],
  "categories": ["layout"],
  "aliases": [{ "name": "hamburger", "deprecated": true, "deprecationReason": "alias.name" }]
}"#;

const CHANGELOG: &str = "# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/).

## [v0.2.0] - 2026-09-01
### Changed
- Updated Lucide icons from 0.468.0 to 0.469.0
- Added 3 new icon(s)

## [v0.1.0] - 2026-08-01
### Added
- Initial release

---

[v0.2.0]: https://github.com/lucide-rs/lucide-rs/releases/tag/v0.2.0
[v0.1.0]: https://github.com/lucide-rs/lucide-rs/releases/tag/v0.1.0
";

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        Self { _dir: dir, root }
    }

    /// A workspace with two icons under `icons/` and a config pointing at them.
    fn with_icons() -> Self {
        let ws = Self::new();
        ws.write("icons/box.svg", BOX_SVG);
        ws.write("icons/menu.svg", MENU_SVG);
        ws.write("icons/menu.json", MENU_JSON);
        ws.write(
            "lucide.config.json",
            r#"{
  // Generated module lives in another crate
  "iconsDir": "icons",
  "output": "out/icons.rs",
  "runtimePath": "lucide_render"
}"#,
        );
        ws
    }

    fn write(&self, path: &str, content: &str) {
        let path = self.root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn path(&self, path: &str) -> Utf8PathBuf {
        self.root.join(path)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_lucide-tool"))
            .arg("--workspace")
            .arg(self.root.as_str())
            .args(args)
            .env_remove("LUCIDE_LOG")
            .env_remove("GITHUB_TOKEN")
            .output()
            .expect("failed to run lucide-tool")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn read(path: &Utf8Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_generate_from_config() {
    let ws = Workspace::with_icons();

    let output = ws.run(&["generate"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out_file = ws.path("out/icons.rs");
    assert_eq!(
        stdout(&output),
        format!("Successfully generated 2 icons to {out_file}\n")
    );
    assert!(stderr(&output).contains("Regenerating icons from"));

    let module = read(&out_file);
    assert!(module.starts_with("// @generated by lucide-codegen"));
    assert!(module.contains("pub fn r#box(options: Option<&lucide_render::RenderOptions>) -> String"));
    assert!(module.contains("pub fn menu(options: Option<&lucide_render::RenderOptions>) -> String"));
    assert!(module.contains("builder.register_alias(\"hamburger\", \"menu\", menu, Some(\"alias.name\"));"));
}

#[test]
fn test_generate_explicit_paths_json() {
    let ws = Workspace::with_icons();

    let output = ws.run(&[
        "--output-format",
        "json",
        "generate",
        "icons",
        "manifest/icons.json",
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["iconsGenerated"], 2);
    assert_eq!(summary["aliasesRegistered"], 1);

    let manifest: serde_json::Value =
        serde_json::from_str(&read(&ws.path("manifest/icons.json"))).unwrap();
    let names: Vec<&str> = manifest["icons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|icon| icon["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["box", "menu"]);
    assert!(!ws.path("out/icons.rs").exists());
}

#[test]
fn test_generate_format_switch_changes_extension() {
    let ws = Workspace::with_icons();

    let output = ws.run(&["generate", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let manifest = ws.path("out/icons.json");
    assert_eq!(
        stdout(&output),
        format!("Successfully generated 2 icons to {manifest}\n")
    );
    let value: serde_json::Value = serde_json::from_str(&read(&manifest)).unwrap();
    assert_eq!(value["icons"].as_array().unwrap().len(), 2);
    assert!(!ws.path("out/icons.rs").exists());
}

#[test]
fn test_generate_malformed_icon_fails_without_output() {
    let ws = Workspace::with_icons();
    ws.write("icons/broken.svg", "<svg><path d=\"M1 1\" />");

    let output = ws.run(&["generate"]);
    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(err.contains("Error:"), "stderr: {err}");
    assert!(err.contains("broken.svg"), "stderr: {err}");
    assert!(stdout(&output).is_empty());
    assert!(!ws.path("out/icons.rs").exists());
}

#[test]
fn test_generate_missing_source_dir() {
    let ws = Workspace::new();

    let output = ws.run(&["generate", "no-such-dir", "out.rs"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no-such-dir"));
}

#[test]
fn test_malformed_config_is_error() {
    let ws = Workspace::with_icons();
    ws.write("lucide.config.json", "{ \"iconsDir\": ");

    let output = ws.run(&["generate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("lucide.config.json"));
}

#[test]
fn test_release_notes_latest() {
    let ws = Workspace::new();
    ws.write("CHANGELOG.md", CHANGELOG);

    let output = ws.run(&["release-notes"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "### Changed\n- Updated Lucide icons from 0.468.0 to 0.469.0\n- Added 3 new icon(s)\n"
    );
}

#[test]
fn test_release_notes_json() {
    let ws = Workspace::new();
    ws.write("CHANGELOG.md", CHANGELOG);

    let output = ws.run(&["release-notes", "v0.1.0", "--output-format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["version"], "v0.1.0");
    assert_eq!(value["notes"], "### Added\n- Initial release");
}

#[test]
fn test_release_notes_unknown_version() {
    let ws = Workspace::new();
    ws.write("CHANGELOG.md", CHANGELOG);

    let output = ws.run(&["release-notes", "v9.9.9"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("version v9.9.9 not found in changelog"));
}

#[test]
fn test_check_without_version_file() {
    let ws = Workspace::new();

    let output = ws.run(&["check"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("failed to get current version"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_update_with_empty_version_file() {
    let ws = Workspace::new();
    ws.write(".lucide-version", "  \n");

    let output = ws.run(&["update", "--dry-run"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("version file is empty"));
}
