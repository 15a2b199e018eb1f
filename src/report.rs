use iconsmith_client::Negotiated;
use iconsmith_unpack::{DirStatus, ExtractSummary};
use std::path::PathBuf;

/// Per-step outcomes of a completed run, for human consumption.
#[derive(Debug)]
pub struct RunReport {
    /// Output directories checked, with whether each already existed.
    pub paths: Vec<(PathBuf, DirStatus)>,
    /// How the session used for the download was obtained.
    pub session: Negotiated,
    /// Downloaded archive size in bytes.
    pub archive_bytes: u64,
    /// What extraction wrote and skipped.
    pub extraction: ExtractSummary,
}

impl RunReport {
    /// Render one line per completed step.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.paths.len() + 3);
        for (path, status) in &self.paths {
            match status {
                DirStatus::Verified => lines.push(format!("{} verified", path.display())),
                DirStatus::Created => lines.push(format!("{} created", path.display())),
            }
        }
        match &self.session {
            Negotiated::Reused(id) => lines.push(format!("session {id} reused from cache")),
            Negotiated::Created(id) => lines.push(format!("session {id} created")),
        }
        lines.push(format!("archive fetched ({} bytes)", self.archive_bytes));
        lines.push(format!("extraction complete: {}", self.extraction));
        lines
    }
}
