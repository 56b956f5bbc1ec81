//! Output formatting.

use crate::cli::OutputFormat;
use lucide_codegen::GenerationResult;
use serde::Serialize;

/// Result of `check` and `update`, printed as JSON for CI consumption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateResult {
    /// Whether the latest upstream tag differs from the current one.
    pub has_updates: bool,
    /// Tag recorded in the version file.
    pub current_tag: String,
    /// Latest upstream tag.
    pub latest_tag: String,
    /// Icons added by the update.
    pub icons_added: usize,
    /// Icons removed by the update.
    pub icons_removed: usize,
    /// Web page of the upstream release.
    pub release_url: String,
    /// Upstream release notes.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_notes: String,
    /// Changelog that received a new entry.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub changelog_path: String,
}

/// Release notes printed by `release-notes --output-format json`.
#[derive(Debug, Serialize)]
pub struct ReleaseNotes<'a> {
    /// The version the notes belong to.
    pub version: &'a str,
    /// The notes.
    pub notes: &'a str,
}

/// Serializes `value` as pretty-printed JSON with a trailing newline.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Formats the result of a generation run.
pub fn format_generation(result: &GenerationResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => {
            let icon_word = if result.icons_generated == 1 {
                "icon"
            } else {
                "icons"
            };
            Ok(format!(
                "Successfully generated {} {} to {}\n",
                result.icons_generated, icon_word, result.output
            ))
        }
        OutputFormat::Json => to_json(result),
    }
}

/// Formats release notes for `version`.
pub fn format_release_notes(
    version: &str,
    notes: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(format!("{notes}\n")),
        OutputFormat::Json => to_json(&ReleaseNotes { version, notes }),
    }
}
