//! The generation driver: source directory in, one artifact out.

use crate::emitter::Emitter;
use crate::error::GenerateError;
use crate::ir::IconSet;
use crate::rust::RustEmitter;
use camino::{Utf8Path, Utf8PathBuf};
use lucide_source::{process_icon, SVG_EXTENSION};
use serde::Serialize;
use std::fs;
use std::io::Write;
use walkdir::WalkDir;

/// Summary of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Number of icons emitted. Aliases are not counted here.
    pub icons_generated: usize,
    /// Number of alias registrations emitted.
    pub aliases_registered: usize,
    /// Where the artifact was written.
    pub output: Utf8PathBuf,
}

/// Generates the Rust registry module for every icon in `source_dir`.
pub fn generate(
    source_dir: &Utf8Path,
    output_path: &Utf8Path,
) -> Result<GenerationResult, GenerateError> {
    generate_with(source_dir, output_path, &RustEmitter::default())
}

/// Generates an artifact for every icon in `source_dir` using `emitter`.
///
/// Any failing icon aborts the run before anything is written, and the
/// artifact itself is replaced atomically.
pub fn generate_with(
    source_dir: &Utf8Path,
    output_path: &Utf8Path,
    emitter: &dyn Emitter,
) -> Result<GenerationResult, GenerateError> {
    let set = collect_icons(source_dir)?;
    let content = emitter.emit(&set);
    write_atomic(output_path, content.as_bytes())?;

    tracing::info!(
        icons = set.len(),
        aliases = set.alias_count(),
        output = %output_path,
        "generated icon artifact"
    );

    Ok(GenerationResult {
        icons_generated: set.len(),
        aliases_registered: set.alias_count(),
        output: output_path.to_owned(),
    })
}

/// Builds the icon set for `source_dir` without writing anything.
pub fn collect_icons(source_dir: &Utf8Path) -> Result<IconSet, GenerateError> {
    let icons = list_svg_files(source_dir)?
        .into_iter()
        .map(|path| {
            process_icon(&path, source_dir).map_err(|source| GenerateError::Icon { path, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    IconSet::new(icons)
}

/// Lists the SVG files directly inside `dir`, sorted by file name.
///
/// Symlinked files are listed under the link's name.
pub fn list_svg_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, GenerateError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| GenerateError::ListDirectory {
            path: dir.to_owned(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::try_from(entry.into_path())
            .map_err(|err| GenerateError::NonUtf8Path(err.into_path_buf()))?;
        if path.extension() == Some(SVG_EXTENSION) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Lists the icon names (SVG file stems) in `dir`, sorted.
pub fn list_icon_names(dir: &Utf8Path) -> Result<Vec<String>, GenerateError> {
    Ok(list_svg_files(dir)?
        .iter()
        .filter_map(|path| path.file_stem().map(str::to_string))
        .collect())
}

/// Writes `content` to `path` through a temp file in the same directory.
fn write_atomic(path: &Utf8Path, content: &[u8]) -> Result<(), GenerateError> {
    let write_err = |source| GenerateError::Write {
        path: path.to_owned(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    file.write_all(content).map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
