//! File-based session store.
//!
//! Persists the session identifier as a single small file. The location is
//! fixed per installation (platform cache directory) rather than
//! per-project, so repeated runs against different projects share one
//! session the same way the tool installation does.

use crate::error::{ErrorKind, Result};
use crate::id::SessionId;
use crate::store::SessionStore;
use async_trait::async_trait;
use directories::ProjectDirs;
use std::io::Error as IoError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Filename of the cached token inside the cache directory.
const SESSION_FILENAME: &str = "session";

/// Session store backed by a single file on the local filesystem.
///
/// Writes are atomic: the token is staged to a temporary file in the same
/// directory and renamed over the destination, so a concurrent reader never
/// observes a half-written token.
#[derive(Clone, Debug)]
pub struct FileStore {
    name: String,
    path: PathBuf,
}

impl FileStore {
    /// Create a store at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { name: "file".to_owned(), path: path.into() }
    }

    /// Create a store at the fixed per-installation location.
    ///
    /// # Errors
    ///
    /// Returns [`NoCacheDir`](ErrorKind::NoCacheDir) when the platform
    /// provides no usable cache directory for the current user.
    pub fn at_default_location() -> Result<Self> {
        let Some(dirs) = ProjectDirs::from("", "", "iconsmith") else {
            exn::bail!(ErrorKind::NoCacheDir);
        };
        Ok(Self::new(dirs.cache_dir().join(SESSION_FILENAME)))
    }

    /// Path of the underlying cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Result<Option<SessionId>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(ErrorKind::Io(err))?,
        };
        if raw.trim().is_empty() {
            // An empty file is equivalent to no cache at all.
            return Ok(None);
        }
        Ok(Some(SessionId::new(raw)?))
    }

    async fn write(&self, id: &SessionId) -> Result<()> {
        let Some(parent) = self.path.parent() else {
            exn::bail!(ErrorKind::InvalidPath(self.path.clone()));
        };
        fs::create_dir_all(parent).await.map_err(ErrorKind::Io)?;

        let path = self.path.clone();
        let parent = parent.to_path_buf();
        let token = id.as_str().to_owned();
        tokio::task::spawn_blocking(move || -> Result<()> {
            // Stage in the same directory so the rename stays on one
            // filesystem and replaces the destination atomically.
            let mut staged = tempfile::NamedTempFile::new_in(&parent).map_err(ErrorKind::Io)?;
            staged.write_all(token.as_bytes()).map_err(ErrorKind::Io)?;
            staged.persist(&path).map_err(|err| ErrorKind::Io(err.error))?;
            Ok(())
        })
        .await
        .map_err(|err| ErrorKind::Io(IoError::other(err)))??;
        tracing::debug!(path = %self.path.display(), "session identifier cached");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cached session identifier cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ErrorKind::Io(err))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> FileStore {
        FileStore::new(dir.join("session"))
    }

    #[tokio::test]
    async fn test_read_absent_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(temp_dir.path());
        assert!(store.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(temp_dir.path());
        let id = SessionId::new("abc123").unwrap();
        store.write(&id).await.unwrap();
        assert_eq!(store.read().await.unwrap(), Some(id));
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(temp_dir.path());
        store.write(&SessionId::new("first").unwrap()).await.unwrap();
        store.write(&SessionId::new("second").unwrap()).await.unwrap();
        assert_eq!(store.read().await.unwrap().unwrap().as_str(), "second");
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested/dir/session"));
        store.write(&SessionId::new("abc").unwrap()).await.unwrap();
        assert!(store.read().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_read_trims_trailing_newline() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("session");
        std::fs::write(&path, "abc123\n").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.read().await.unwrap().unwrap().as_str(), "abc123");
    }

    #[tokio::test]
    async fn test_read_empty_file_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("session");
        std::fs::write(&path, "  \n").unwrap();
        let store = FileStore::new(&path);
        assert!(store.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(temp_dir.path());
        store.write(&SessionId::new("abc").unwrap()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.read().await.unwrap().is_none());
        // Clearing an already-empty store succeeds.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_write_leaves_no_staging_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(temp_dir.path());
        store.write(&SessionId::new("abc").unwrap()).await.unwrap();
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
