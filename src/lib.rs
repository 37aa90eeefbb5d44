//! # redirect-stubs
//!
//! Generates static HTML redirect stubs when a documentation site moves to a
//! new URL/file layout. Old and new content trees carry YAML frontmatter
//! (`id`, `permalink`, `redirect_from`); pages are correlated across the two
//! snapshots by `permalink`, and every matched old page — plus every declared
//! alias — gets a one-line meta-refresh file pointing at its new home.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Scan       old/, new/        →  PermalinkIndex per tree (+ warnings)
//! 2. Correlate  old × new indexes →  unmatched-permalink report
//! 3. Plan       indexes + baseURL →  ordered RedirectJobs (+ warnings)
//! 4. Emit       jobs → output/    →  stub files (+ failure report)
//! ```
//!
//! The stages run strictly in sequence and hand each other plain values: the
//! scanner returns its index rather than filling process-wide state, so the
//! correlator and planner take `&PermalinkIndex` and the indexes are frozen
//! the moment construction ends. Everything is synchronous and local — the
//! whole input fits in memory and no stage touches the network.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`metadata`] | Frontmatter extraction and one-shot field coercion into `PageMeta` |
//! | [`scan`] | Stage 1 — walks a content root, builds the permalink index, accumulates warnings |
//! | [`correlate`] | Stage 2 — reports old permalinks absent from the new tree |
//! | [`plan`] | Stage 3 — derives output paths and destination URLs, expands aliases |
//! | [`emit`] | Stage 4 — writes the meta-refresh stubs, collecting per-file failures |
//! | [`types`] | Shared value types: `ContentEntry`, `PermalinkIndex`, `RedirectJob` |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Warnings Are Not Errors
//!
//! A docs tree mid-migration is never pristine: duplicated permalinks, pages
//! that were dropped on the new site, frontmatter someone fat-fingered. All
//! of that is reported and worked around — the scan keeps walking, the plan
//! keeps planning, and only unusable CLI input or a completely failed write
//! run changes the exit code. Aborting a 2,000-file scan over one broken
//! YAML block would make the tool useless on exactly the trees it exists for.
//!
//! ## Deterministic Output
//!
//! The permalink index is a `BTreeMap`, so jobs are planned in permalink
//! order and two runs over the same trees produce byte-identical output and
//! identical diagnostics. That makes the generated redirect site diffable
//! between runs — the natural way to review a migration.
//!
//! ## The Stub Is a String, Not a Template
//!
//! The emitted document is one fixed meta-refresh line. Its exact bytes are
//! the output contract (downstream checks diff them), so it's produced by a
//! single `format!` rather than an HTML templating layer that would bring
//! its own escaping and attribute-quoting opinions.

pub mod correlate;
pub mod emit;
pub mod metadata;
pub mod output;
pub mod plan;
pub mod scan;
pub mod types;
