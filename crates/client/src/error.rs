//! Client Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.
//!
//! The variants mirror the outcomes a caller can act on: a transport
//! failure during negotiation or download is terminal, a rejected
//! configuration needs a human to fix the config file, and a session the
//! service no longer recognises after renegotiation means the run should be
//! reported as failed rather than retried further.

use derive_more::{Display, Error};
use iconsmith_session::error::Error as SessionError;
use std::io::Error as IoError;

/// A client error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// HTTP client could not be constructed.
    #[display("HTTP client construction failed: {_0}")]
    ClientBuild(#[error(not(source))] String),
    /// Transport-level failure during session creation.
    #[display("session negotiation failed: {_0}")]
    NegotiationFailed(#[error(not(source))] String),
    /// The remote service rejected the configuration content.
    #[display("remote service rejected the configuration: {_0}")]
    InvalidConfig(#[error(not(source))] String),
    /// Transport-level failure during archive download.
    #[display("archive download failed: {_0}")]
    FetchFailed(#[error(not(source))] String),
    /// The service rejected a freshly negotiated session as well.
    #[display("session not recognised by the remote service, even after renegotiation")]
    SessionExpired,
    /// Session store failure while caching or clearing an identifier.
    #[display("session store error")]
    Store,
    /// Underlying I/O error (spooling the archive to disk).
    #[display("I/O error: {_0}")]
    Io(IoError),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}
impl ErrorKind {
    /// Convert a session store error into a client error, preserving the
    /// store's `Exn` frame as a child in its own error tree.
    #[track_caller]
    pub fn store(err: SessionError) -> Error {
        err.raise(ErrorKind::Store)
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NegotiationFailed(_) | Self::FetchFailed(_) | Self::Io(_))
    }
}
