//! Icon records built from source files.

use crate::error::SourceError;
use crate::metadata::read_metadata;
use crate::naming::to_pascal_case;
use crate::svg::extract_inner;
use camino::Utf8Path;
use serde::Serialize;
use smol_str::SmolStr;
use std::fs;

/// File extension of icon sources.
pub const SVG_EXTENSION: &str = "svg";

/// File extension of sidecar metadata files.
pub const METADATA_EXTENSION: &str = "json";

/// One drawable icon, derived from a single SVG file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// Hyphenated name taken from the file stem (`circle-x`).
    pub name: SmolStr,
    /// PascalCase form of `name` (`CircleX`).
    pub pascal_name: SmolStr,
    /// Inner drawable markup, never containing `<svg`.
    pub paths: String,
    /// Alternate names, in metadata declaration order.
    pub aliases: Vec<Alias>,
}

/// An alternate name rendering the same markup as its target icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    /// Hyphenated alias name.
    pub name: SmolStr,
    /// PascalCase form of `name`.
    pub pascal_name: SmolStr,
    /// Name of the owning icon.
    pub target_name: SmolStr,
    /// PascalCase name of the owning icon.
    pub target_pascal_name: SmolStr,
    /// Whether the alias is deprecated.
    pub deprecated: bool,
    /// Reason for the deprecation, empty unless deprecated.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub deprecation_reason: String,
}

impl Icon {
    /// Returns every name this icon answers to: its own, then each alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(|a| a.name.as_str()))
    }
}

/// Builds an [`Icon`] from an SVG file and its optional sidecar.
///
/// The sidecar is `<stem>.json` inside `source_dir`. A missing sidecar means
/// no aliases; an unreadable or unparsable one is an error.
pub fn process_icon(svg_path: &Utf8Path, source_dir: &Utf8Path) -> Result<Icon, SourceError> {
    let stem = svg_path
        .file_stem()
        .ok_or_else(|| SourceError::InvalidIdentifier {
            name: svg_path.to_string(),
            reason: "path has no file name",
        })?;

    let document = fs::read_to_string(svg_path).map_err(|source| SourceError::Io {
        path: svg_path.to_owned(),
        source,
    })?;

    let name = SmolStr::new(stem);
    let pascal_name = SmolStr::new(to_pascal_case(stem)?);
    let paths = extract_inner(&document)?;

    let metadata_path = source_dir.join(format!("{stem}.{METADATA_EXTENSION}"));
    let aliases = match read_metadata(&metadata_path) {
        Ok(metadata) => metadata
            .aliases
            .into_iter()
            .map(|entry| {
                Ok(Alias {
                    pascal_name: SmolStr::new(to_pascal_case(&entry.name)?),
                    name: SmolStr::new(entry.name),
                    target_name: name.clone(),
                    target_pascal_name: pascal_name.clone(),
                    deprecated: entry.deprecated,
                    deprecation_reason: entry.deprecation_reason,
                })
            })
            .collect::<Result<Vec<_>, SourceError>>()?,
        Err(err) if err.is_not_found() => Vec::new(),
        Err(err) => return Err(err),
    };

    tracing::debug!(icon = %name, aliases = aliases.len(), "processed icon");

    Ok(Icon {
        name,
        pascal_name,
        paths,
        aliases,
    })
}
