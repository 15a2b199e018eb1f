//! Client for Fontello-compatible icon-font generation services.
//!
//! The service's protocol is two requests wide: a multipart `POST` of the
//! icon configuration file returns an opaque session identifier, and a
//! `GET {host}/{session}/get` returns the generated archive for that
//! session. Sessions expire server-side at the service's whim, signalled
//! by a not-found response on download.
//!
//! The [`IconService`] trait is the seam between the protocol orchestration
//! ([`negotiate`], [`fetch_archive`]) and the wire: production code uses the
//! reqwest-backed [`HttpService`], tests use [`MockService`] with scripted
//! responses.

pub mod error;
mod fetch;
mod negotiate;
pub mod service;

pub use crate::fetch::{FetchedArchive, fetch_archive};
pub use crate::negotiate::{Negotiated, negotiate};
pub use crate::service::{Download, HttpService, IconService, NegotiateResponse};
#[cfg(any(test, feature = "mock"))]
pub use crate::service::MockService;
