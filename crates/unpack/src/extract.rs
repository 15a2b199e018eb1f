//! Archive extraction, driving [`route_entry`] over every entry.

use crate::error::{ErrorKind, Result};
use crate::route::{EntryAction, ExtractMode, route_entry};
use derive_more::Display;
use std::fs::{File, create_dir_all};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// What an extraction run wrote and skipped.
#[derive(Clone, Debug, Default, Display, PartialEq, Eq)]
#[display("{} file(s) written, {} entr(y/ies) skipped", written.len(), skipped)]
pub struct ExtractSummary {
    /// Paths written, in archive order.
    pub written: Vec<PathBuf>,
    /// File entries drained without writing.
    pub skipped: usize,
}

/// Unpack the downloaded archive according to the extraction mode.
///
/// Every file entry goes through [`route_entry`]; directory entries are
/// recreated in full mode and ignored in selective mode. Entries whose
/// paths would escape the extraction root fail the run. The caller owns the
/// archive file's lifetime — nothing here deletes it.
pub async fn extract(
    archive: &Path,
    mode: &ExtractMode,
    exclude: &[String],
    scss: bool,
) -> Result<ExtractSummary> {
    let archive = archive.to_path_buf();
    let mode = mode.clone();
    let exclude = exclude.to_vec();
    // The zip reader is synchronous; run the whole loop on a blocking thread.
    tokio::task::spawn_blocking(move || extract_blocking(&archive, &mode, &exclude, scss))
        .await
        .map_err(|err| ErrorKind::ExtractionFailed(format!("extraction task failed: {err}")))?
}

fn extract_blocking(archive: &Path, mode: &ExtractMode, exclude: &[String], scss: bool) -> Result<ExtractSummary> {
    let file = File::open(archive).map_err(ErrorKind::Io)?;
    let mut zip = ZipArchive::new(file).map_err(|err| ErrorKind::ExtractionFailed(err.to_string()))?;

    if let ExtractMode::Full { dest } = mode {
        create_dir_all(dest).map_err(ErrorKind::Io)?;
    }

    let mut summary = ExtractSummary::default();
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|err| ErrorKind::ExtractionFailed(err.to_string()))?;
        let raw_name = entry.name().to_owned();
        let Some(entry_path) = entry.enclosed_name().and_then(|path| path.to_str().map(String::from)) else {
            exn::bail!(ErrorKind::UnsafeEntry(raw_name));
        };

        if entry.is_dir() {
            // Directory markers only matter for verbatim extraction, where
            // empty directories are preserved.
            if let ExtractMode::Full { dest } = mode {
                create_dir_all(dest.join(&entry_path)).map_err(ErrorKind::Io)?;
            }
            continue;
        }

        match route_entry(mode, &entry_path, exclude, scss) {
            EntryAction::WriteTo(target) => {
                if let Some(parent) = target.parent() {
                    create_dir_all(parent).map_err(ErrorKind::Io)?;
                }
                let mut out = File::create(&target).map_err(ErrorKind::Io)?;
                io::copy(&mut entry, &mut out)
                    .map_err(|err| ErrorKind::ExtractionFailed(format!("{entry_path}: {err}")))?;
                tracing::debug!(entry = %entry_path, target = %target.display(), "entry written");
                summary.written.push(target);
            }
            EntryAction::Discard => {
                tracing::trace!(entry = %entry_path, "entry ignored");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}
