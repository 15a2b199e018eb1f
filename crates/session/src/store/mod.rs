//! Session store trait and implementations.
//!
//! This module defines the [`SessionStore`] trait, a minimal read/write/clear
//! interface over the cached session identifier, with a file-based backend
//! for production use and an in-memory backend for tests.

mod file;
#[cfg(any(test, feature = "mock"))]
mod memory;

pub use self::file::FileStore;
#[cfg(any(test, feature = "mock"))]
pub use self::memory::MemoryStore;
use crate::error::Result;
use crate::id::SessionId;
use async_trait::async_trait;

/// Persistence interface for the cached session identifier.
///
/// A store holds at most one identifier. Reading an absent identifier is
/// not an error; the caller decides whether to negotiate a fresh session.
/// Implementations must tolerate `clear` on an already-empty store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Name of the configured store (used for logging only).
    fn name(&self) -> &str;

    /// Return the cached identifier, or `None` when nothing is cached.
    async fn read(&self) -> Result<Option<SessionId>>;

    /// Persist an identifier, replacing any prior value.
    async fn write(&self, id: &SessionId) -> Result<()>;

    /// Drop the cached identifier. Succeeds when nothing was cached.
    async fn clear(&self) -> Result<()>;
}
