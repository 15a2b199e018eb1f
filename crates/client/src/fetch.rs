//! Archive download with bounded session renegotiation.

use crate::error::{ErrorKind, Result};
use crate::negotiate::{Negotiated, negotiate};
use crate::service::{Download, IconService};
use iconsmith_session::SessionStore;
use std::io::Write;
use tempfile::NamedTempFile;

/// A downloaded archive, spooled to a temporary file.
///
/// The temporary file is removed when this value is dropped, so the archive
/// never outlives the scope that fetched it — including on error paths.
#[derive(Debug)]
pub struct FetchedArchive {
    /// Temporary file holding the archive bytes.
    pub file: NamedTempFile,
    /// Archive size in bytes.
    pub size: u64,
    /// How the session used for the successful download was obtained.
    pub session: Negotiated,
}

/// Negotiate a session and download the generated archive.
///
/// On a not-found response the cached session is cleared and negotiation
/// runs once more before a single retry of the download; a second not-found
/// is terminal [`SessionExpired`](ErrorKind::SessionExpired). Transport
/// errors are terminal immediately.
pub async fn fetch_archive(
    service: &dyn IconService,
    store: &dyn SessionStore,
    config: &[u8],
) -> Result<FetchedArchive> {
    let mut negotiated = negotiate(service, store, config).await?;
    let mut renegotiated = false;
    let archive = loop {
        match service.download(negotiated.id()).await? {
            Download::Archive(bytes) => break bytes,
            Download::NotFound if !renegotiated => {
                tracing::warn!(
                    session = %negotiated.id(),
                    "remote service no longer recognises the cached session; renegotiating",
                );
                store.clear().await.map_err(ErrorKind::store)?;
                negotiated = negotiate(service, store, config).await?;
                renegotiated = true;
            }
            Download::NotFound => exn::bail!(ErrorKind::SessionExpired),
        }
    };

    let size = archive.len() as u64;
    // The archive is a small in-memory blob at this point; spooling it is a
    // single write, not worth shipping to a blocking task.
    let mut file = NamedTempFile::new().map_err(ErrorKind::Io)?;
    file.write_all(&archive).map_err(ErrorKind::Io)?;
    file.flush().map_err(ErrorKind::Io)?;
    tracing::info!(bytes = size, path = %file.path().display(), "archive fetched");
    Ok(FetchedArchive { file, size, session: negotiated })
}
