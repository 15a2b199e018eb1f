//! Scripted in-memory [`IconService`] for testing.

use crate::error::Result;
use crate::service::{Download, IconService, NegotiateResponse};
use async_trait::async_trait;
use iconsmith_session::SessionId;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory service with scripted responses and call counting.
///
/// Responses are queued in order with the builder methods; each call pops
/// the front of the matching queue. An exhausted queue panics — the panic
/// is DELIBERATE: if a test drives more requests than it scripted, the
/// test should not pass.
#[derive(Default)]
pub struct MockService {
    sessions: Mutex<VecDeque<NegotiateResponse>>,
    downloads: Mutex<VecDeque<Download>>,
    create_calls: AtomicUsize,
    download_calls: AtomicUsize,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful session creation.
    ///
    /// Panics on an invalid token; mis-scripted tests should not pass.
    pub fn with_session(self, token: &str) -> Self {
        let Ok(id) = SessionId::new(token) else {
            panic!("MockService::with_session: invalid token {token:?}");
        };
        self.sessions.lock().unwrap().push_back(NegotiateResponse::Session(id));
        self
    }

    /// Queue a configuration rejection.
    pub fn with_rejection(self, message: &str) -> Self {
        self.sessions.lock().unwrap().push_back(NegotiateResponse::Rejected(message.to_owned()));
        self
    }

    /// Queue a successful archive download.
    pub fn with_archive(self, bytes: impl Into<Vec<u8>>) -> Self {
        self.downloads.lock().unwrap().push_back(Download::Archive(bytes.into()));
        self
    }

    /// Queue a not-found (unknown/expired session) download response.
    pub fn with_not_found(self) -> Self {
        self.downloads.lock().unwrap().push_back(Download::NotFound);
        self
    }

    /// Number of `create_session` calls made so far.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of `download` calls made so far.
    pub fn download_calls(&self) -> usize {
        self.download_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IconService for MockService {
    async fn create_session(&self, _config: &[u8]) -> Result<NegotiateResponse> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let Some(response) = self.sessions.lock().unwrap().pop_front() else {
            panic!("MockService: unscripted create_session call");
        };
        Ok(response)
    }

    async fn download(&self, _session: &SessionId) -> Result<Download> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        let Some(response) = self.downloads.lock().unwrap().pop_front() else {
            panic!("MockService: unscripted download call");
        };
        Ok(response)
    }
}
