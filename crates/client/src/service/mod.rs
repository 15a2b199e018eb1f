//! Remote service trait and implementations.
//!
//! [`IconService`] abstracts the two wire operations the tool performs,
//! returning typed responses rather than raw bodies: the service signals
//! a rejected configuration with a success-shaped body containing a known
//! marker, and an expired session with a not-found status. Both are decoded
//! here so the orchestration code never inspects response text.

mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use self::http::HttpService;
#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockService;
use crate::error::Result;
use async_trait::async_trait;
use iconsmith_session::SessionId;

/// Marker the service embeds in an otherwise success-shaped response body
/// when the uploaded configuration is malformed.
const INVALID_MARKER: &str = "Invalid";

/// Outcome of a session-creation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NegotiateResponse {
    /// The service accepted the configuration and issued a session.
    Session(SessionId),
    /// The service rejected the configuration content; the message is the
    /// service's own description of what it disliked.
    Rejected(String),
}

/// Outcome of an archive download request.
#[derive(Clone, Debug)]
pub enum Download {
    /// The generated archive, as returned by the service.
    Archive(Vec<u8>),
    /// The session is unknown or expired server-side.
    NotFound,
}

/// The two operations a Fontello-compatible service exposes.
#[async_trait]
pub trait IconService: Send + Sync {
    /// Upload the icon configuration file and obtain a session.
    ///
    /// Errors are transport-level only; a configuration the service
    /// refuses comes back as [`NegotiateResponse::Rejected`].
    async fn create_session(&self, config: &[u8]) -> Result<NegotiateResponse>;

    /// Download the generated archive for a session.
    ///
    /// An unknown/expired session comes back as [`Download::NotFound`];
    /// errors are transport-level only.
    async fn download(&self, session: &SessionId) -> Result<Download>;
}

/// Decode a session-creation response body into a typed outcome.
///
/// The service reports malformed input by returning an error message where
/// the session token would be, so classification happens on body content:
/// anything containing the known marker (or nothing at all) is a rejection.
pub(crate) fn decode_session_body(body: &str) -> NegotiateResponse {
    let token = body.trim();
    if token.is_empty() || token.contains(INVALID_MARKER) {
        return NegotiateResponse::Rejected(token.to_owned());
    }
    match SessionId::new(token) {
        Ok(id) => NegotiateResponse::Session(id),
        Err(_) => NegotiateResponse::Rejected(token.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_token() {
        let decoded = decode_session_body("abcdef0123456789\n");
        assert_eq!(decoded, NegotiateResponse::Session(SessionId::new("abcdef0123456789").unwrap()));
    }

    #[test]
    fn test_decode_rejection_marker() {
        let decoded = decode_session_body("Invalid config file: missing glyphs");
        assert!(matches!(decoded, NegotiateResponse::Rejected(msg) if msg.contains("missing glyphs")));
    }

    #[test]
    fn test_decode_empty_body_is_rejection() {
        assert!(matches!(decode_session_body("  \n"), NegotiateResponse::Rejected(_)));
    }
}
