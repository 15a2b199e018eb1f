//! Output directory verification.

use crate::error::{ErrorKind, Result};
use crate::route::ExtractMode;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of verifying a single output directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirStatus {
    /// The directory already existed.
    Verified,
    /// The directory (and any missing ancestors) was created.
    Created,
}

/// Confirm an output directory exists, optionally creating it.
///
/// A path that exists but is not a directory fails the same way as an
/// absent one without `force`: outputs cannot be written into a file.
pub async fn ensure_dir(dir: &Path, force: bool) -> Result<DirStatus> {
    match fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!(path = %dir.display(), "output directory verified");
            Ok(DirStatus::Verified)
        }
        Ok(_) => exn::bail!(ErrorKind::PathMissing(dir.to_path_buf())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if !force {
                exn::bail!(ErrorKind::PathMissing(dir.to_path_buf()));
            }
            fs::create_dir_all(dir).await.map_err(ErrorKind::Io)?;
            tracing::info!(path = %dir.display(), "output directory created");
            Ok(DirStatus::Created)
        }
        Err(err) => Err(ErrorKind::Io(err))?,
    }
}

/// Verify the output directories an extraction mode will write into.
///
/// In selective mode the configured fonts/styles directories are checked
/// concurrently and both must succeed. Full mode verifies nothing here —
/// extraction creates the destination tree as it unpacks.
pub async fn verify_outputs(mode: &ExtractMode, force: bool) -> Result<Vec<(PathBuf, DirStatus)>> {
    let ExtractMode::Selective { fonts, styles } = mode else {
        return Ok(Vec::new());
    };
    let (fonts, styles) =
        futures::try_join!(check_optional(fonts.clone(), force), check_optional(styles.clone(), force))?;
    Ok([fonts, styles].into_iter().flatten().collect())
}

async fn check_optional(dir: Option<PathBuf>, force: bool) -> Result<Option<(PathBuf, DirStatus)>> {
    match dir {
        Some(dir) => {
            let status = ensure_dir(&dir, force).await?;
            Ok(Some((dir, status)))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_existing_directory_verifies() {
        let temp_dir = tempfile::tempdir().unwrap();
        let status = ensure_dir(temp_dir.path(), false).await.unwrap();
        assert_eq!(status, DirStatus::Verified);
    }

    #[tokio::test]
    async fn test_missing_without_force_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("fonts");
        let err = ensure_dir(&missing, false).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::PathMissing(path) if path == &missing));
    }

    #[tokio::test]
    async fn test_missing_with_force_creates_chain() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("assets/fonts/icons");
        let status = ensure_dir(&nested, true).await.unwrap();
        assert_eq!(status, DirStatus::Created);
        // Subsequent verification reports the path as existing.
        assert_eq!(ensure_dir(&nested, false).await.unwrap(), DirStatus::Verified);
    }

    #[tokio::test]
    async fn test_file_at_path_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("fonts");
        std::fs::write(&file, b"not a directory").unwrap();
        let err = ensure_dir(&file, false).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::PathMissing(_)));
    }

    #[tokio::test]
    async fn test_verify_outputs_checks_only_configured_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let fonts = temp_dir.path().join("fonts");
        std::fs::create_dir(&fonts).unwrap();
        // No styles directory configured: only the fonts path is checked.
        let mode = ExtractMode::Selective { fonts: Some(fonts.clone()), styles: None };
        let statuses = verify_outputs(&mode, false).await.unwrap();
        assert_eq!(statuses, vec![(fonts, DirStatus::Verified)]);
    }

    #[tokio::test]
    async fn test_verify_outputs_fails_when_either_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let fonts = temp_dir.path().join("fonts");
        std::fs::create_dir(&fonts).unwrap();
        let mode = ExtractMode::Selective {
            fonts: Some(fonts),
            styles: Some(temp_dir.path().join("styles")),
        };
        let err = verify_outputs(&mode, false).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::PathMissing(_)));
    }

    #[tokio::test]
    async fn test_verify_outputs_full_mode_is_noop() {
        let mode = ExtractMode::Full { dest: PathBuf::from("does/not/exist") };
        assert!(verify_outputs(&mode, false).await.unwrap().is_empty());
    }
}
