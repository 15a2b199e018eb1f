//! HTTP implementation of [`IconService`] backed by reqwest.

use crate::error::{ErrorKind, Result};
use crate::service::{Download, IconService, NegotiateResponse, decode_session_body};
use async_trait::async_trait;
use iconsmith_session::SessionId;
use reqwest::{Client, StatusCode, multipart, redirect};

/// Archive downloads follow at most this many redirects before giving up.
const MAX_REDIRECTS: usize = 10;
/// Form field name the service expects the configuration file under.
const CONFIG_FIELD: &str = "config";
/// Filename declared for the uploaded configuration part.
const CONFIG_FILENAME: &str = "config.json";

/// A Fontello-compatible service reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpService {
    host: String,
    client: Client,
}

impl HttpService {
    /// Create a service client for the given host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuild`](ErrorKind::ClientBuild) when the underlying
    /// HTTP client cannot be constructed (e.g. no TLS backend available).
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|err| ErrorKind::ClientBuild(err.to_string()))?;
        Ok(Self {
            host: host.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// URL of the archive download endpoint for a session.
    fn download_url(&self, session: &SessionId) -> String {
        format!("{}/{}/get", self.host, session)
    }
}

#[async_trait]
impl IconService for HttpService {
    async fn create_session(&self, config: &[u8]) -> Result<NegotiateResponse> {
        let part = multipart::Part::bytes(config.to_vec())
            .file_name(CONFIG_FILENAME)
            .mime_str("application/json")
            .map_err(|err| ErrorKind::NegotiationFailed(err.to_string()))?;
        let form = multipart::Form::new().part(CONFIG_FIELD, part);

        tracing::debug!(host = %self.host, "uploading configuration");
        let response = self
            .client
            .post(&self.host)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ErrorKind::NegotiationFailed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::NegotiationFailed(format!("unexpected status {status}")));
        }
        let body = response.text().await.map_err(|err| ErrorKind::NegotiationFailed(err.to_string()))?;
        Ok(decode_session_body(&body))
    }

    async fn download(&self, session: &SessionId) -> Result<Download> {
        let url = self.download_url(session);
        tracing::debug!(%url, "requesting generated archive");
        let response =
            self.client.get(&url).send().await.map_err(|err| ErrorKind::FetchFailed(err.to_string()))?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(Download::NotFound),
            status if status.is_success() => {
                let bytes = response.bytes().await.map_err(|err| ErrorKind::FetchFailed(err.to_string()))?;
                Ok(Download::Archive(bytes.to_vec()))
            }
            status => exn::bail!(ErrorKind::FetchFailed(format!("unexpected status {status}"))),
        }
    }
}
