//! Icon archive download and extraction.

use crate::client::{ReleaseAsset, ReleaseClient};
use crate::error::ReleaseError;
use camino::Utf8Path;
use std::fs::{self, File};
use std::io::{self, Read, Seek};
use zip::ZipArchive;

/// Directory inside the archive that holds the icon files.
const ARCHIVE_ICONS_DIR: &str = "icons/";

/// Downloads `asset` and extracts its icons into `dest`.
///
/// `dest` is emptied first, so it ends up holding exactly the icon set of
/// the release. Returns the number of files extracted.
pub async fn download_and_extract(
    client: &ReleaseClient,
    asset: &ReleaseAsset,
    dest: &Utf8Path,
) -> Result<usize, ReleaseError> {
    if asset.browser_download_url.is_empty() {
        return Err(ReleaseError::MissingDownloadUrl(asset.name.clone()));
    }

    let mut archive = tempfile::Builder::new()
        .prefix("lucide-icons-")
        .suffix(".zip")
        .tempfile()
        .map_err(ReleaseError::TempFile)?;

    let bytes = client
        .download(&asset.browser_download_url, archive.as_file_mut())
        .await?;
    tracing::debug!(bytes, asset = %asset.name, "downloaded icon archive");

    archive.as_file_mut().rewind().map_err(ReleaseError::TempFile)?;
    extract_icons(archive.as_file(), dest)
}

/// Extracts `icons/*.svg` and `icons/*.json` from a zip archive into `dest`,
/// flattening any subdirectories.
///
/// `dest` is created if missing and emptied before extraction.
pub fn extract_icons<R: Read + Seek>(reader: R, dest: &Utf8Path) -> Result<usize, ReleaseError> {
    let mut archive = ZipArchive::new(reader)?;

    fs::create_dir_all(dest).map_err(|source| io_error(dest, source))?;
    clear_directory(dest)?;

    let mut extracted = 0;
    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }

        let name = file.name().to_string();
        if !name.starts_with(ARCHIVE_ICONS_DIR) {
            continue;
        }
        if !name.ends_with(".svg") && !name.ends_with(".json") {
            continue;
        }
        let Some(file_name) = Utf8Path::new(&name).file_name() else {
            continue;
        };

        let target = dest.join(file_name);
        let mut out = File::create(&target).map_err(|source| io_error(&target, source))?;
        io::copy(&mut file, &mut out).map_err(|source| io_error(&target, source))?;
        extracted += 1;
    }

    tracing::info!(files = extracted, dest = %dest, "extracted icons");
    Ok(extracted)
}

/// Removes every entry inside `dir`, keeping `dir` itself.
fn clear_directory(dir: &Utf8Path) -> Result<(), ReleaseError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(io_error(dir, err)),
    };

    for entry in entries {
        let entry = entry.map_err(|source| io_error(dir, source))?;
        let path = entry.path();
        let result = if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|source| io_error(dir, source))?;
    }
    Ok(())
}

fn io_error(path: &Utf8Path, source: io::Error) -> ReleaseError {
    ReleaseError::Io {
        path: path.to_owned(),
        source,
    }
}
