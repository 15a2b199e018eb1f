//! Fetch and unpack generated icon-font bundles.
//!
//! The pipeline is three sequential steps against a Fontello-compatible
//! service, with one sliver of parallelism up front:
//!
//! 1. verify (or force-create) the configured output directories — the
//!    fonts and styles checks run concurrently;
//! 2. negotiate a session by uploading the icon configuration file,
//!    reusing a locally cached session identifier when one exists;
//! 3. download the generated archive (renegotiating at most once when the
//!    service reports the cached session as unknown) and route its entries
//!    into the output directories, or unpack it verbatim.
//!
//! [`run`] wires the production backends (HTTP service, file-based session
//! store); [`run_with`] accepts the trait objects directly so tests can
//! substitute scripted implementations.

pub mod error;
mod pipeline;
mod report;

pub use crate::pipeline::{run, run_with};
pub use crate::report::RunReport;
