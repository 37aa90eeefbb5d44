//! Redirect stub emission.
//!
//! Final stage of the pipeline: writes one tiny HTML file per planned job.
//! Each stub is a single meta-refresh tag with zero delay — the smallest
//! document that makes a browser leave immediately:
//!
//! ```text
//! <meta http-equiv="refresh" content="0; URL='https://docs.example.com/v2/newfoo'" />
//! ```
//!
//! Parent directories are created as needed and existing files are
//! overwritten without warning (re-running the tool over the same output
//! root is the normal workflow). A failed job is recorded and the remaining
//! jobs still run; the caller turns a non-empty failure list into a non-zero
//! exit after reporting all of them.

use crate::types::RedirectJob;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// One job that could not be written. Kept alongside the I/O cause so the
/// final report can name every failed path.
#[derive(Error, Debug)]
#[error("failed to write {}: {source}", path.display())]
pub struct EmitFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Outcome of an emission run.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub written: usize,
    pub failures: Vec<EmitFailure>,
}

/// Render the stub document for a destination. The exact byte content is the
/// output contract; there is deliberately no surrounding HTML scaffolding
/// and no trailing newline.
pub fn redirect_stub(destination: &Url) -> String {
    format!("<meta http-equiv=\"refresh\" content=\"0; URL='{destination}'\" />")
}

/// Write every job under `output_root`, collecting failures instead of
/// stopping at the first one.
pub fn write_redirects(jobs: &[RedirectJob], output_root: &Path) -> EmitReport {
    let mut report = EmitReport::default();
    for job in jobs {
        match write_stub(job, output_root) {
            Ok(()) => report.written += 1,
            Err(source) => report.failures.push(EmitFailure {
                path: job.output_path.clone(),
                source,
            }),
        }
    }
    report
}

fn write_stub(job: &RedirectJob, output_root: &Path) -> std::io::Result<()> {
    let target = output_root.join(&job.output_path);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, redirect_stub(&job.destination))
}
