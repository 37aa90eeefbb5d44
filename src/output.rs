//! CLI output formatting for all pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that does the I/O. Format functions
//! are pure — no filesystem access, no side effects.
//!
//! Two streams, split by audience:
//!
//! - **stdout**: the plan (`outputPath → destinationURL` lines) and the run
//!   summary — the record of what the tool did.
//! - **stderr**: diagnostics — duplicate permalinks, files without
//!   permalinks, unmatched pages, planning conflicts, write failures. These
//!   are for the operator cleaning up the migration and never change the
//!   exit code on their own.
//!
//! ## Example
//!
//! ```text
//! ==> Indexing old tree docs-old/
//! Indexed 214 pages
//! ==> Correlating old pages against new
//! 3 old pages have no match in the new tree
//! ==> Planning redirects
//! foo.html → https://docs.example.com/v2/newfoo
//! bar/index.html → https://docs.example.com/v2/newfoo
//! index.html → https://docs.example.com/v2/home
//! ==> Writing redirect stubs → redirects/
//! Indexed 214 old, 230 new; matched 211, unmatched 3; wrote 390 stubs
//! ```

use crate::emit::EmitReport;
use crate::plan::RedirectPlan;
use crate::scan::ScanReport;

/// Format one tree's scan result: a count line plus its warnings.
///
/// The first line is for stdout, the rest for stderr; [`print_scan_report`]
/// does the split.
pub fn format_scan_report(report: &ScanReport) -> Vec<String> {
    let count = report.index.len();
    let mut lines = vec![format!(
        "Indexed {count} page{}",
        if count == 1 { "" } else { "s" }
    )];
    for warning in &report.warnings {
        lines.push(format!("warning: {warning}"));
    }
    lines
}

pub fn print_scan_report(report: &ScanReport) {
    let lines = format_scan_report(report);
    println!("{}", lines[0]);
    for line in &lines[1..] {
        eprintln!("{line}");
    }
}

/// Format the correlation report: one summary line, one line per gap.
pub fn format_unmatched(unmatched: &[String]) -> Vec<String> {
    if unmatched.is_empty() {
        return vec!["All old pages matched in the new tree".to_string()];
    }
    let (noun, verb) = if unmatched.len() == 1 {
        ("page", "has")
    } else {
        ("pages", "have")
    };
    let mut lines = vec![format!(
        "{} old {noun} {verb} no match in the new tree",
        unmatched.len()
    )];
    for permalink in unmatched {
        lines.push(format!("warning: unmatched permalink {permalink:?}"));
    }
    lines
}

pub fn print_unmatched(unmatched: &[String]) {
    let lines = format_unmatched(unmatched);
    println!("{}", lines[0]);
    for line in &lines[1..] {
        eprintln!("{line}");
    }
}

/// Format the plan: one `outputPath → destinationURL` line per job, then
/// planning warnings.
pub fn format_plan(plan: &RedirectPlan) -> Vec<String> {
    let mut lines: Vec<String> = plan
        .jobs
        .iter()
        .map(|job| format!("{} \u{2192} {}", job.output_path.display(), job.destination))
        .collect();
    for warning in &plan.warnings {
        lines.push(format!("warning: {warning}"));
    }
    lines
}

pub fn print_plan(plan: &RedirectPlan) {
    for job in &plan.jobs {
        println!("{} \u{2192} {}", job.output_path.display(), job.destination);
    }
    for warning in &plan.warnings {
        eprintln!("warning: {warning}");
    }
}

/// Format the end-of-run summary line plus any write failures.
pub fn format_summary(
    old_indexed: usize,
    new_indexed: usize,
    matched: usize,
    unmatched: usize,
    emit: &EmitReport,
) -> Vec<String> {
    let mut lines = vec![format!(
        "Indexed {old_indexed} old, {new_indexed} new; matched {matched}, \
         unmatched {unmatched}; wrote {} stubs",
        emit.written
    )];
    for failure in &emit.failures {
        lines.push(format!("error: {failure}"));
    }
    if !emit.failures.is_empty() {
        lines.push(format!("{} stub(s) failed to write", emit.failures.len()));
    }
    lines
}

pub fn print_summary(
    old_indexed: usize,
    new_indexed: usize,
    matched: usize,
    unmatched: usize,
    emit: &EmitReport,
) {
    let lines = format_summary(old_indexed, new_indexed, matched, unmatched, emit);
    println!("{}", lines[0]);
    for line in &lines[1..] {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::EmitFailure;
    use crate::types::RedirectJob;
    use std::path::PathBuf;
    use url::Url;

    #[test]
    fn scan_report_counts_and_warns() {
        let mut report = ScanReport::default();
        report
            .index
            .insert(
                "/a".into(),
                crate::types::ContentEntry {
                    source_path: PathBuf::from("a.md"),
                    id: "a".into(),
                    aliases: vec![],
                },
            )
            .unwrap();
        report.warnings.push(crate::scan::ScanWarning::MissingPermalink {
            path: PathBuf::from("orphan.md"),
        });

        let lines = format_scan_report(&report);
        assert_eq!(lines[0], "Indexed 1 page");
        assert!(lines[1].starts_with("warning: no permalink in orphan.md"));
    }

    #[test]
    fn unmatched_report_pluralizes() {
        let lines = format_unmatched(&["/x".to_string()]);
        assert_eq!(lines[0], "1 old page has no match in the new tree");

        let lines = format_unmatched(&["/x".to_string(), "/y".to_string()]);
        assert_eq!(lines[0], "2 old pages have no match in the new tree");
        assert_eq!(lines[1], "warning: unmatched permalink \"/x\"");
    }

    #[test]
    fn unmatched_report_clean_when_empty() {
        assert_eq!(
            format_unmatched(&[]),
            vec!["All old pages matched in the new tree".to_string()]
        );
    }

    #[test]
    fn plan_lines_show_path_and_destination() {
        let plan = RedirectPlan {
            jobs: vec![RedirectJob {
                output_path: PathBuf::from("foo.html"),
                destination: Url::parse("https://docs.example.com/v2/newfoo").unwrap(),
            }],
            warnings: vec![],
        };
        let lines = format_plan(&plan);
        assert_eq!(
            lines,
            vec!["foo.html \u{2192} https://docs.example.com/v2/newfoo".to_string()]
        );
    }

    #[test]
    fn summary_reports_failures() {
        let emit = EmitReport {
            written: 3,
            failures: vec![EmitFailure {
                path: PathBuf::from("bad.html"),
                source: std::io::Error::other("disk full"),
            }],
        };
        let lines = format_summary(10, 12, 9, 1, &emit);
        assert_eq!(
            lines[0],
            "Indexed 10 old, 12 new; matched 9, unmatched 1; wrote 3 stubs"
        );
        assert!(lines[1].contains("bad.html"));
        assert_eq!(lines[2], "1 stub(s) failed to write");
    }
}
