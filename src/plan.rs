//! Redirect planning.
//!
//! Stage 3 of the redirect pipeline: turns the two indexes into an ordered
//! sequence of [`RedirectJob`]s. For every old entry whose permalink exists
//! in the new index with a usable `id`:
//!
//! - one primary job at the old file's relative path, extension rewritten to
//!   `.html`;
//! - one job per `redirect_from` alias, path from [`alias_output_path`];
//!
//! all pointing at `base_url` with the new entry's `id` appended as path
//! segments. A final job redirects the root `index.html` to the configured
//! default page, regardless of tree contents.
//!
//! ## Alias path heuristic
//!
//! Whether an alias denotes a file or a directory is inferred from its
//! suffix, nothing else: a recognized content extension (`.html`, `.htm`,
//! `.md`, `.markdown`) makes it file-like and the extension is rewritten to
//! `.html`; anything else is treated as a directory and targets
//! `alias/index.html`. The inference lives in one function so it can be
//! swapped without touching the planner.
//!
//! ## Collisions
//!
//! Two jobs can legitimately target the same output path (an alias repeated
//! across entries, or an alias shadowing a primary path). When destinations
//! agree the duplicate is dropped; when they differ the later job wins and a
//! warning names the path and both URLs. Either way each output path appears
//! at most once in the plan, so emission order can never silently diverge
//! on disk.

use crate::types::{PermalinkIndex, RedirectJob};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Alias suffixes treated as file-like. Everything else is a directory slug.
const FILE_LIKE_EXTENSIONS: &[&str] = &["html", "htm", "md", "markdown"];

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("base URL {0} has no path segments; a hierarchical URL (http/https) is required")]
    OpaqueBaseUrl(Url),
}

/// Diagnostics produced while planning. Logged, never fatal.
#[derive(Error, Debug)]
pub enum PlanWarning {
    #[error(
        "permalink {permalink:?} matched but {} has no id on the new site; no redirect generated",
        old_path.display()
    )]
    MissingDestinationId { permalink: String, old_path: PathBuf },
    #[error(
        "output collision at {}: {earlier} replaced by {later}",
        path.display()
    )]
    OutputCollision {
        path: PathBuf,
        earlier: Url,
        later: Url,
    },
}

/// The ordered job sequence plus planning diagnostics.
#[derive(Debug, Default)]
pub struct RedirectPlan {
    pub jobs: Vec<RedirectJob>,
    pub warnings: Vec<PlanWarning>,
}

impl RedirectPlan {
    /// Append a job, enforcing the one-job-per-output-path invariant.
    fn push(&mut self, seen: &mut HashMap<PathBuf, usize>, job: RedirectJob) {
        match seen.get(&job.output_path) {
            Some(&slot) => {
                let earlier = &self.jobs[slot];
                if earlier.destination != job.destination {
                    self.warnings.push(PlanWarning::OutputCollision {
                        path: job.output_path.clone(),
                        earlier: earlier.destination.clone(),
                        later: job.destination.clone(),
                    });
                    self.jobs[slot] = job;
                }
                // Same path, same destination: nothing new to write.
            }
            None => {
                seen.insert(job.output_path.clone(), self.jobs.len());
                self.jobs.push(job);
            }
        }
    }
}

/// Plan every redirect for the migration.
///
/// Old entries without a new-tree match are skipped here — the correlator
/// has already reported them. The root `index.html` job is always appended
/// last.
pub fn plan_redirects(
    old: &PermalinkIndex,
    new: &PermalinkIndex,
    base_url: &Url,
    default_page_id: &str,
) -> Result<RedirectPlan, PlanError> {
    let mut plan = RedirectPlan::default();
    let mut seen = HashMap::new();

    for (permalink, old_entry) in old.iter() {
        let Some(new_entry) = new.get(permalink) else {
            continue;
        };
        if new_entry.id.is_empty() {
            plan.warnings.push(PlanWarning::MissingDestinationId {
                permalink: permalink.to_string(),
                old_path: old_entry.source_path.clone(),
            });
            continue;
        }

        let destination = join_destination(base_url, &new_entry.id)?;
        plan.push(
            &mut seen,
            RedirectJob {
                output_path: primary_output_path(&old_entry.source_path),
                destination: destination.clone(),
            },
        );

        for alias in &old_entry.aliases {
            plan.push(
                &mut seen,
                RedirectJob {
                    output_path: alias_output_path(alias),
                    destination: destination.clone(),
                },
            );
        }
    }

    plan.push(
        &mut seen,
        RedirectJob {
            output_path: PathBuf::from("index.html"),
            destination: join_destination(base_url, default_page_id)?,
        },
    );

    Ok(plan)
}

/// Output path for a matched entry: the old file's tree-relative path with
/// its extension rewritten to `.html`.
pub fn primary_output_path(source_path: &Path) -> PathBuf {
    source_path.with_extension("html")
}

/// Output path for a `redirect_from` alias.
///
/// Suffix-based inference (see module docs): file-like aliases keep their
/// path with the extension rewritten to `.html`, everything else becomes a
/// directory holding an `index.html`. A bare `/` maps to `index.html`.
pub fn alias_output_path(alias: &str) -> PathBuf {
    let trimmed = alias.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return PathBuf::from("index.html");
    }

    let path = Path::new(trimmed);
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if FILE_LIKE_EXTENSIONS.contains(&ext.as_str()) {
        path.with_extension("html")
    } else {
        path.join("index.html")
    }
}

/// Compose a destination URL from the base and a page id.
///
/// The id is appended as path segments, so duplicate slashes are normalized
/// exactly once and the base's scheme, host and path prefix survive intact.
pub fn join_destination(base_url: &Url, id: &str) -> Result<Url, PlanError> {
    let mut destination = base_url.clone();
    {
        let mut segments = destination
            .path_segments_mut()
            .map_err(|()| PlanError::OpaqueBaseUrl(base_url.clone()))?;
        segments.pop_if_empty();
        for segment in id.split('/').filter(|s| !s.is_empty()) {
            segments.push(segment);
        }
    }
    Ok(destination)
}
