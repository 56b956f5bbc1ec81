//! Configuration loading.

use crate::cli::ArtifactFormat;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Name of the project config file.
pub const CONFIG_FILE: &str = "lucide.config.json";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but cannot be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The config file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON of the expected shape.
    #[error("invalid config {path}: {source}")]
    Parse {
        /// The config file.
        path: Utf8PathBuf,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Project configuration (`lucide.config.json`).
///
/// Every field is optional; paths are relative to the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolConfig {
    /// Directory holding the upstream SVG and JSON files.
    pub icons_dir: Utf8PathBuf,
    /// Generated artifact path.
    pub output: Utf8PathBuf,
    /// Generated artifact format.
    pub format: ArtifactFormat,
    /// Path the generated Rust module uses to reach the runtime crate.
    pub runtime_path: String,
    /// Version marker file.
    pub version_file: Utf8PathBuf,
    /// Changelog file.
    pub changelog: Utf8PathBuf,
    /// Upstream repository (`owner/repo`).
    pub upstream: String,
    /// This project's repository (`owner/repo`), used in changelog links.
    pub project: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            icons_dir: Utf8PathBuf::from("lucide-icons"),
            output: Utf8PathBuf::from("crates/lucide-render/src/icons.rs"),
            format: ArtifactFormat::Rust,
            runtime_path: "crate".to_string(),
            version_file: Utf8PathBuf::from(lucide_release::VERSION_FILE),
            changelog: Utf8PathBuf::from(lucide_release::CHANGELOG_FILE),
            upstream: lucide_release::LUCIDE_REPOSITORY.to_string(),
            project: "lucide-rs/lucide-rs".to_string(),
        }
    }
}

impl ToolConfig {
    /// Loads the config for `workspace`.
    ///
    /// An explicit `path` must exist. Without one, `lucide.config.json` in
    /// the workspace is used if present, and defaults otherwise.
    pub fn load(workspace: &Utf8Path, path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => resolve(workspace, path),
            None => {
                let path = workspace.join(CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!(workspace = %workspace, "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path, "loaded config");
        Ok(config)
    }

    /// Parses a config from JSON, allowing `//` and `/* */` comments.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&remove_json_comments(json))
    }

    /// Makes every path absolute against `workspace`.
    pub fn resolve_paths(mut self, workspace: &Utf8Path) -> Self {
        self.icons_dir = resolve(workspace, &self.icons_dir);
        self.output = resolve(workspace, &self.output);
        self.version_file = resolve(workspace, &self.version_file);
        self.changelog = resolve(workspace, &self.changelog);
        self
    }
}

/// Joins `path` onto `base` unless it is already absolute.
pub fn resolve(base: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        path.to_owned()
    } else {
        base.join(path)
    }
}

/// Removes single-line and multi-line comments from JSON.
fn remove_json_comments(json: &str) -> String {
    let mut result = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if c == '"' {
                in_string = false;
            } else if c == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
        } else if c == '"' {
            result.push(c);
            in_string = true;
        } else if c == '/' {
            match chars.peek() {
                Some('/') => {
                    chars.next();
                    while chars.peek().is_some_and(|&next| next != '\n') {
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}
