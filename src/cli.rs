use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Command-line surface.
///
/// Every option is optional: unset options serialise to nothing, so they
/// never clobber values from `iconsmith.toml` or the environment when the
/// struct is merged as the highest-precedence figment provider.
#[derive(Debug, Parser, Serialize)]
#[command(name = "iconsmith", version, about = "Fetch and unpack generated icon-font bundles")]
pub struct Cli {
    /// Remote icon-font service URL.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Icon configuration file to upload.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,

    /// Directory to write font binaries into.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<PathBuf>,

    /// Directory to write stylesheets into.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<PathBuf>,

    /// Destination for verbatim extraction when neither --fonts nor
    /// --styles is given.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Write stylesheets as underscore-prefixed .scss partials.
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub scss: bool,

    /// Base filename to skip during selective extraction (repeatable).
    #[arg(long = "exclude", value_name = "FILENAME")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Create missing output directories instead of failing.
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    #[serde(skip)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        let cli = Cli::parse_from([
            "iconsmith",
            "--fonts",
            "assets/fonts",
            "--scss",
            "--exclude",
            "icons.css",
            "--exclude",
            "animation.css",
            "-vv",
        ]);
        assert_eq!(cli.fonts, Some(PathBuf::from("assets/fonts")));
        assert!(cli.scss);
        assert_eq!(cli.exclude, vec!["icons.css".to_owned(), "animation.css".to_owned()]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.host.is_none());
        assert!(!cli.force);
    }
}
