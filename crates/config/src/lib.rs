//! Configuration loading and validation.
//!
//! Settings are merged figment-style, lowest precedence first: built-in
//! defaults, an `iconsmith.toml` in the working directory, `ICONSMITH_*`
//! environment variables, then caller-supplied overrides (the CLI).
//!
//! The selective/full extraction decision lives here, in
//! [`Settings::extract_mode`], and nowhere else: downstream code consumes
//! the derived [`ExtractMode`], so a partially filled-in configuration
//! cannot silently change extraction behaviour.

pub mod error;

use crate::error::{ErrorKind, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use iconsmith_unpack::ExtractMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default remote service host.
pub const DEFAULT_HOST: &str = "https://fontello.com";
/// Configuration filename read from the working directory.
pub const CONFIG_FILENAME: &str = "iconsmith.toml";
/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ICONSMITH_";

/// Resolved tool configuration.
///
/// Immutable input describing what to fetch and where to put it; nothing in
/// the pipeline mutates it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Settings {
    /// Remote icon-font service URL.
    pub host: String,
    /// Local icon configuration file uploaded during session negotiation.
    pub config: PathBuf,
    /// Directory for font binaries (selective extraction).
    pub fonts: Option<PathBuf>,
    /// Directory for stylesheets (selective extraction).
    pub styles: Option<PathBuf>,
    /// Destination for verbatim extraction when neither fonts nor styles
    /// is configured.
    pub output: PathBuf,
    /// Write stylesheets as underscore-prefixed `.scss` partials.
    pub scss: bool,
    /// Base filenames to discard during selective extraction.
    pub exclude: Vec<String>,
    /// Create missing output directories instead of failing.
    pub force: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            config: PathBuf::from("config.json"),
            fonts: None,
            styles: None,
            output: PathBuf::from("icons"),
            scss: false,
            exclude: Vec::new(),
            force: false,
        }
    }
}

impl Settings {
    /// Load settings from all providers, with `overrides` taking the
    /// highest precedence.
    pub fn load(overrides: impl Serialize) -> Result<Self> {
        let settings: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILENAME))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|err| ErrorKind::Invalid(err.to_string()))?;
        tracing::debug!(?settings, "settings resolved");
        settings.validate()
    }

    /// Derive the explicit extraction mode.
    ///
    /// Selective whenever at least one of the fonts/styles directories is
    /// configured; verbatim extraction to `output` otherwise.
    pub fn extract_mode(&self) -> ExtractMode {
        if self.fonts.is_some() || self.styles.is_some() {
            ExtractMode::Selective { fonts: self.fonts.clone(), styles: self.styles.clone() }
        } else {
            ExtractMode::Full { dest: self.output.clone() }
        }
    }

    fn validate(self) -> Result<Self> {
        if self.host.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("host must not be empty".to_owned()));
        }
        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            exn::bail!(ErrorKind::Invalid(format!("host must be an http(s) URL, got {:?}", self.host)));
        }
        Ok(self)
    }
}
