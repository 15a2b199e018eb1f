use crate::error::{ErrorKind, Result};
use derive_more::Display;

/// An opaque session token issued by the remote icon-font service.
///
/// The token's internal structure is the service's business; the only
/// guarantee made here is that it is non-empty and carries no surrounding
/// whitespace.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a raw token, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyToken`](ErrorKind::EmptyToken) if the token is empty
    /// or whitespace-only.
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            exn::bail!(ErrorKind::EmptyToken);
        }
        Ok(Self(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let id = SessionId::new(" abc123\n").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_rejects_empty() {
        let err = SessionId::new("   \n").unwrap_err();
        assert!(matches!(&*err, ErrorKind::EmptyToken));
        assert!(SessionId::new("").is_err());
    }

    #[test]
    fn test_display() {
        let id = SessionId::new("deadbeef").unwrap();
        assert_eq!(id.to_string(), "deadbeef");
    }
}
