//! Output path verification and archive routing.
//!
//! The downloaded archive bundles font binaries, stylesheets and
//! documentation files. Depending on configuration the tool either routes
//! recognised entries into dedicated fonts/styles directories (discarding
//! the rest) or unpacks the whole archive verbatim. The selective/full
//! decision is an explicit [`ExtractMode`], derived once by configuration —
//! never inferred entry-by-entry.

pub mod error;
mod extract;
mod paths;
mod route;

pub use crate::extract::{ExtractSummary, extract};
pub use crate::paths::{DirStatus, ensure_dir, verify_outputs};
pub use crate::route::{EntryAction, ExtractMode, FONT_EXTENSIONS, route_entry};
