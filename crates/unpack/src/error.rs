//! Unpack Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};
use std::io::Error as IoError;
use std::path::PathBuf;

/// An unpack error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for unpack operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// A required output directory does not exist (and force-create was
    /// not requested) or is not a directory.
    #[display("{} missing (enable force to create it)", _0.display())]
    PathMissing(#[error(not(source))] PathBuf),
    /// Archive could not be opened or an entry stream failed mid-read.
    #[display("archive extraction failed: {_0}")]
    ExtractionFailed(#[error(not(source))] String),
    /// An archive entry path would escape the extraction root.
    #[display("unsafe entry path in archive: {_0}")]
    UnsafeEntry(#[error(not(source))] String),
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}
