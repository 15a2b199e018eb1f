//! Session identifier cache.
//!
//! The remote icon-font service issues an opaque session token the first
//! time a configuration is uploaded. Re-uploading the same configuration on
//! every run is wasteful, so the token is cached locally and trusted until
//! the service rejects it. This crate provides the cache: a [`SessionStore`]
//! trait with a file-based backend for production use and an in-memory
//! backend for tests.
//!
//! At most one identifier is cached at a time. Absence of a cached
//! identifier is not an error; [`SessionStore::read`] reports it as `None`.

pub mod error;
mod id;
pub mod store;

pub use crate::id::SessionId;
pub use crate::store::SessionStore;
use std::sync::Arc;

pub type StoreHandle = Arc<dyn SessionStore + Send + Sync>;
