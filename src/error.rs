//! Pipeline Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction. Each variant names the pipeline step that failed; the
//! precise cause stays attached as a child frame in the error tree.

use derive_more::{Display, Error};
use iconsmith_client::error::{Error as ClientError, ErrorKind as ClientErrorKind};
use iconsmith_session::error::Error as SessionError;
use iconsmith_unpack::error::{Error as UnpackError, ErrorKind as UnpackErrorKind};
use std::io::Error as IoError;
use std::path::PathBuf;

/// A pipeline error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The local icon configuration file could not be read.
    #[display("could not read icon configuration {}: {source}", path.display())]
    ConfigFile { path: PathBuf, source: IoError },
    /// An output directory is missing or unusable.
    #[display("output path verification failed")]
    Paths,
    /// Session could not be negotiated (transport failure or rejected
    /// configuration).
    #[display("session negotiation failed")]
    Negotiation,
    /// Archive could not be downloaded.
    #[display("archive download failed")]
    Fetch,
    /// Archive could not be unpacked.
    #[display("archive extraction failed")]
    Extraction,
    /// Session store failure.
    #[display("session store error")]
    Store,
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
}

impl ErrorKind {
    /// Wrap a session store error, preserving its `Exn` frame as a child.
    #[track_caller]
    pub fn session(err: SessionError) -> Error {
        err.raise(ErrorKind::Store)
    }

    /// Wrap a client error under the pipeline step it belongs to.
    #[track_caller]
    pub fn client(err: ClientError) -> Error {
        let kind = match &*err {
            ClientErrorKind::ClientBuild(_)
            | ClientErrorKind::NegotiationFailed(_)
            | ClientErrorKind::InvalidConfig(_) => ErrorKind::Negotiation,
            ClientErrorKind::FetchFailed(_) | ClientErrorKind::SessionExpired | ClientErrorKind::Io(_) => {
                ErrorKind::Fetch
            }
            ClientErrorKind::Store => ErrorKind::Store,
        };
        err.raise(kind)
    }

    /// Wrap an unpack error under the pipeline step it belongs to.
    #[track_caller]
    pub fn unpack(err: UnpackError) -> Error {
        let kind = match &*err {
            UnpackErrorKind::PathMissing(_) => ErrorKind::Paths,
            _ => ErrorKind::Extraction,
        };
        err.raise(kind)
    }
}
