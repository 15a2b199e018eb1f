//! Session negotiation against the remote service, cache-first.

use crate::error::{ErrorKind, Result};
use crate::service::{IconService, NegotiateResponse};
use iconsmith_session::{SessionId, SessionStore};

/// How the current session identifier was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Negotiated {
    /// Taken from the local cache; no network request was made.
    Reused(SessionId),
    /// Freshly issued by the remote service and cached.
    Created(SessionId),
}
impl Negotiated {
    pub fn id(&self) -> &SessionId {
        match self {
            Self::Reused(id) | Self::Created(id) => id,
        }
    }
}

/// Obtain a session identifier for the given configuration.
///
/// A cached identifier is returned immediately and trusted as-is — no
/// staleness check, the download path discovers expiry. Otherwise the
/// configuration is uploaded once; an issued identifier is persisted to the
/// store before being returned, a rejection surfaces as
/// [`InvalidConfig`](ErrorKind::InvalidConfig) and is never cached.
pub async fn negotiate(
    service: &dyn IconService,
    store: &dyn SessionStore,
    config: &[u8],
) -> Result<Negotiated> {
    if let Some(id) = store.read().await.map_err(ErrorKind::store)? {
        tracing::debug!(session = %id, store = store.name(), "reusing cached session");
        return Ok(Negotiated::Reused(id));
    }

    tracing::info!("creating session with remote service");
    match service.create_session(config).await? {
        NegotiateResponse::Session(id) => {
            store.write(&id).await.map_err(ErrorKind::store)?;
            tracing::debug!(session = %id, "session created and cached");
            Ok(Negotiated::Created(id))
        }
        NegotiateResponse::Rejected(message) => exn::bail!(ErrorKind::InvalidConfig(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockService;
    use iconsmith_session::store::MemoryStore;

    #[tokio::test]
    async fn test_cached_session_skips_network() {
        // An unscripted MockService panics on any request.
        let service = MockService::new();
        let store = MemoryStore::with_session("cached123");
        let negotiated = negotiate(&service, &store, b"{}").await.unwrap();
        assert_eq!(negotiated.id().as_str(), "cached123");
        assert!(matches!(negotiated, Negotiated::Reused(_)));
        assert_eq!(service.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_fresh_session_is_cached() {
        let service = MockService::new().with_session("fresh456");
        let store = MemoryStore::new();
        let negotiated = negotiate(&service, &store, b"{}").await.unwrap();
        assert!(matches!(negotiated, Negotiated::Created(_)));
        assert_eq!(store.read().await.unwrap().unwrap().as_str(), "fresh456");
        assert_eq!(service.create_calls(), 1);
    }

    #[tokio::test]
    async fn test_rejection_is_not_cached() {
        let service = MockService::new().with_rejection("Invalid config file");
        let store = MemoryStore::new();
        let err = negotiate(&service, &store, b"{}").await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidConfig(msg) if msg.contains("Invalid")));
        assert!(store.read().await.unwrap().is_none());
    }
}
