//! Per-entry routing decisions.
//!
//! [`route_entry`] is a pure function from an archive entry path to a
//! tagged action, applied uniformly to every file entry. Keeping the
//! decision separate from the extraction loop makes the routing table
//! testable without constructing archives.

use std::path::{Path, PathBuf};

/// Font binary extensions routed to the fonts directory.
pub const FONT_EXTENSIONS: [&str; 5] = ["woff", "woff2", "svg", "ttf", "eot"];

/// Stylesheet extension routed to the styles directory.
const STYLE_EXTENSION: &str = "css";

/// What to do with the archive as a whole.
///
/// Derived once from configuration: selective when at least one of the
/// fonts/styles directories is configured, full otherwise. The router only
/// ever consumes the mode, so a partially filled-in configuration cannot
/// silently flip the behaviour per entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractMode {
    /// Route recognised entries into the configured directories, discard
    /// the rest. At least one of the two directories is expected to be set.
    Selective {
        fonts: Option<PathBuf>,
        styles: Option<PathBuf>,
    },
    /// Unpack every entry verbatim under `dest`, preserving the archive's
    /// internal structure.
    Full { dest: PathBuf },
}

/// What to do with a single file entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryAction {
    /// Write the entry's bytes to this path.
    WriteTo(PathBuf),
    /// Drain and discard the entry.
    Discard,
}

/// Decide the action for one file entry.
///
/// `entry_path` is the entry's sanitised path relative to the archive root
/// (directory entries are not routed here; the extraction loop handles
/// them). In selective mode the exclusion set is matched against the base
/// filename, then the extension picks the target directory; everything
/// unrecognised is discarded. In full mode every entry is written verbatim.
pub fn route_entry(mode: &ExtractMode, entry_path: &str, exclude: &[String], scss: bool) -> EntryAction {
    let path = Path::new(entry_path);
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return EntryAction::Discard;
    };

    let (fonts, styles) = match mode {
        ExtractMode::Full { dest } => return EntryAction::WriteTo(dest.join(entry_path)),
        ExtractMode::Selective { fonts, styles } => (fonts.as_ref(), styles.as_ref()),
    };

    if exclude.iter().any(|excluded| excluded == name) {
        return EntryAction::Discard;
    }

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("").to_ascii_lowercase();
    if FONT_EXTENSIONS.contains(&extension.as_str()) {
        return match fonts {
            Some(dir) => EntryAction::WriteTo(dir.join(name)),
            None => EntryAction::Discard,
        };
    }
    if extension == STYLE_EXTENSION {
        return match styles {
            Some(dir) if scss => {
                // Underscore-prefixed partial, e.g. `icons.css` -> `_icons.scss`.
                let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or(name);
                EntryAction::WriteTo(dir.join(format!("_{stem}.scss")))
            }
            Some(dir) => EntryAction::WriteTo(dir.join(name)),
            None => EntryAction::Discard,
        };
    }
    EntryAction::Discard
}
