//! Content-tree indexing.
//!
//! Stage 1 of the redirect pipeline. Walks a content root, runs frontmatter
//! extraction on every regular file, and builds a [`PermalinkIndex`] mapping
//! each permalink to its [`ContentEntry`].
//!
//! ## What gets indexed
//!
//! - Files the extractor doesn't recognize (wrong extension, no frontmatter)
//!   are silently skipped — a docs tree is full of images and includes.
//! - Files with frontmatter but no `permalink` are skipped with a warning:
//!   without a permalink they cannot be matched to the new site at all.
//! - Files with a permalink but no `id` **are** indexed. They can't resolve a
//!   destination URL, but as old-tree entries they still supply the source
//!   path and aliases for redirects.
//! - A permalink claimed twice keeps its first file; the second claim is
//!   reported with both paths.
//!
//! ## Resilience
//!
//! A handful of unreadable or malformed files must not abort a scan of a
//! whole tree. Per-file problems (I/O errors, broken YAML, walk errors below
//! the root) become [`ScanWarning`]s in the report and the walk continues.
//! Only a missing or non-directory root is fatal, and the CLI checks that
//! before scanning starts.

use crate::metadata;
use crate::types::{ContentEntry, PermalinkIndex};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Per-file diagnostics accumulated during a scan. None of these stop the
/// walk or affect the exit code.
#[derive(Error, Debug)]
pub enum ScanWarning {
    #[error("no permalink in {}: file cannot participate in matching", path.display())]
    MissingPermalink { path: PathBuf },
    #[error(
        "permalink {permalink:?} already claimed by {}; ignoring {}",
        first.display(),
        second.display()
    )]
    DuplicatePermalink {
        permalink: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("skipping {}: {reason}", path.display())]
    Skipped { path: PathBuf, reason: String },
}

/// Result of scanning one tree: the frozen index plus everything worth
/// telling the operator about.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub index: PermalinkIndex,
    pub warnings: Vec<ScanWarning>,
}

/// Walk `root` and build a permalink index of its content files.
///
/// Entry paths are stored relative to `root`. Warnings accumulate; the walk
/// itself never fails.
pub fn scan_tree(root: &Path) -> ScanReport {
    let mut report = ScanReport::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                report.warnings.push(ScanWarning::Skipped {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        index_file(entry.path(), root, &mut report);
    }

    report
}

/// Extract one file's metadata and register it in the index.
fn index_file(path: &Path, root: &Path, report: &mut ScanReport) {
    let meta = match metadata::extract(path) {
        Ok(Some(meta)) => meta,
        Ok(None) => return,
        Err(err) => {
            report.warnings.push(ScanWarning::Skipped {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
            return;
        }
    };

    let Some(permalink) = meta.permalink else {
        report.warnings.push(ScanWarning::MissingPermalink {
            path: path.to_path_buf(),
        });
        return;
    };

    let source_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    let entry = ContentEntry {
        source_path,
        id: meta.id.unwrap_or_default(),
        aliases: meta.aliases,
    };

    if let Err(first) = report.index.insert(permalink.clone(), entry) {
        report.warnings.push(ScanWarning::DuplicatePermalink {
            permalink,
            first,
            second: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_page(root: &Path, rel: &str, frontmatter: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, format!("---\n{frontmatter}---\n# Body\n")).unwrap();
    }

    #[test]
    fn scan_indexes_pages_with_permalinks() {
        let tmp = TempDir::new().unwrap();
        write_page(tmp.path(), "foo.md", "id: newfoo\npermalink: /foo\n");
        write_page(tmp.path(), "guide/bar.md", "id: newbar\npermalink: /bar\n");

        let report = scan_tree(tmp.path());
        assert_eq!(report.index.len(), 2);
        assert!(report.warnings.is_empty());

        let foo = report.index.get("/foo").unwrap();
        assert_eq!(foo.source_path, PathBuf::from("foo.md"));
        assert_eq!(foo.id, "newfoo");

        let bar = report.index.get("/bar").unwrap();
        assert_eq!(bar.source_path, PathBuf::from("guide").join("bar.md"));
    }

    #[test]
    fn scan_skips_non_content_files_silently() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("logo.png"), b"binary").unwrap();
        fs::write(tmp.path().join("notes.txt"), "plain text").unwrap();
        write_page(tmp.path(), "page.md", "permalink: /p\nid: p\n");

        let report = scan_tree(tmp.path());
        assert_eq!(report.index.len(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn scan_skips_markdown_without_frontmatter_silently() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("readme.md"), "# No frontmatter here\n").unwrap();

        let report = scan_tree(tmp.path());
        assert!(report.index.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_permalink_warns_and_skips() {
        let tmp = TempDir::new().unwrap();
        write_page(tmp.path(), "orphan.md", "id: orphan\n");

        let report = scan_tree(tmp.path());
        assert!(report.index.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(
            &report.warnings[0],
            ScanWarning::MissingPermalink { path } if path.ends_with("orphan.md")
        ));
    }

    #[test]
    fn duplicate_permalink_keeps_first_and_warns_once_per_extra() {
        let tmp = TempDir::new().unwrap();
        write_page(tmp.path(), "a.md", "id: a\npermalink: /dup\n");
        write_page(tmp.path(), "b.md", "id: b\npermalink: /dup\n");
        write_page(tmp.path(), "c.md", "id: c\npermalink: /dup\n");

        let report = scan_tree(tmp.path());
        assert_eq!(report.index.len(), 1);

        let dupes: Vec<_> = report
            .warnings
            .iter()
            .filter(|w| matches!(w, ScanWarning::DuplicatePermalink { .. }))
            .collect();
        assert_eq!(dupes.len(), 2);
    }

    #[test]
    fn entry_without_id_is_retained() {
        let tmp = TempDir::new().unwrap();
        write_page(
            tmp.path(),
            "legacy.md",
            "permalink: /legacy\nredirect_from:\n  - /older\n",
        );

        let report = scan_tree(tmp.path());
        let entry = report.index.get("/legacy").unwrap();
        assert!(entry.id.is_empty());
        assert_eq!(entry.aliases, vec!["/older"]);
    }

    #[test]
    fn broken_yaml_warns_and_continues() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.md"), "---\n{ not yaml: [\n---\n").unwrap();
        write_page(tmp.path(), "good.md", "permalink: /good\nid: g\n");

        let report = scan_tree(tmp.path());
        assert_eq!(report.index.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(
            &report.warnings[0],
            ScanWarning::Skipped { path, .. } if path.ends_with("bad.md")
        ));
    }

    #[test]
    fn directories_are_not_indexed() {
        let tmp = TempDir::new().unwrap();
        // A directory whose name looks like a content file.
        fs::create_dir_all(tmp.path().join("trap.md")).unwrap();
        write_page(tmp.path(), "real.md", "permalink: /real\nid: r\n");

        let report = scan_tree(tmp.path());
        assert_eq!(report.index.len(), 1);
    }

    #[test]
    fn aliases_are_captured_verbatim_in_order() {
        let tmp = TempDir::new().unwrap();
        write_page(
            tmp.path(),
            "page.md",
            "permalink: /p\nid: p\nredirect_from:\n  - /z-first\n  - /a-second\n",
        );

        let report = scan_tree(tmp.path());
        let entry = report.index.get("/p").unwrap();
        assert_eq!(entry.aliases, vec!["/z-first", "/a-second"]);
    }
}
