//! Session Store Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};
use std::io::Error as IoError;
use std::path::PathBuf;

/// A session store error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for session store operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// No cache directory could be determined for this platform/user.
    #[display("no usable cache directory for the session file")]
    NoCacheDir,
    /// Token was empty or whitespace-only.
    #[display("session token is empty")]
    EmptyToken,
    /// Cache file location is unusable (e.g. points at a directory).
    #[display("invalid session cache path: {}", _0.display())]
    InvalidPath(#[error(not(source))] PathBuf),
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}
