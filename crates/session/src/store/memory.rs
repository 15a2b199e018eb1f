//! In-memory session store for testing.

use crate::error::Result;
use crate::id::SessionId;
use crate::store::SessionStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory session store.
///
/// The identifier lives in an `Option` behind a [`RwLock`], so all trait
/// methods operate on `&self` without external synchronisation. Ideal for
/// unit tests that need a [`SessionStore`] without touching the filesystem.
pub struct MemoryStore {
    name: String,
    session: RwLock<Option<SessionId>>,
}
impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { name: "memory".to_owned(), session: RwLock::new(None) }
    }

    /// Create a store pre-populated with a session identifier.
    ///
    /// Panics on an invalid token. If test setup is wrong, the test should
    /// not pass.
    pub fn with_session(token: &str) -> Self {
        let Ok(id) = SessionId::new(token) else {
            panic!("MemoryStore::with_session: invalid token {token:?}");
        };
        Self {
            name: "memory".to_owned(),
            session: RwLock::new(Some(id)),
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Result<Option<SessionId>> {
        Ok(self.session.read().await.clone())
    }

    async fn write(&self, id: &SessionId) -> Result<()> {
        *self.session.write().await = Some(id.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.session.write().await = None;
        Ok(())
    }
}
