use clap::Parser;
use redirect_stubs::{correlate, emit, output, plan, scan};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use url::Url;

#[derive(Parser)]
#[command(name = "redirect-stubs")]
#[command(about = "Generate meta-refresh redirect stubs for a migrated documentation site")]
#[command(long_about = "\
Generate meta-refresh redirect stubs for a migrated documentation site

Old and new content trees carry YAML frontmatter with `id`, `permalink` and
`redirect_from` fields. Pages are matched across the two trees by permalink;
each matched old page (and each of its redirect_from aliases) becomes a tiny
HTML file under OUTPUT_DIR that immediately redirects to the page's new URL:

  <meta http-equiv=\"refresh\" content=\"0; URL='<BASE_URL>/<id>'\" />

Frontmatter example (old tree):

  ---
  id: extensions-devtools
  permalink: /devtools/extensions
  redirect_from:
    - /old/devtools-extensions.html
    - /devtools-ext
  ---

Diagnostics (duplicate permalinks, pages without a match, write failures) go
to stderr; the plan and summary go to stdout. The run exits non-zero only on
bad arguments or when stubs failed to write.")]
#[command(version)]
struct Cli {
    /// Absolute URL prefix for all generated redirect destinations
    base_url: Url,

    /// Destination page id for the root index.html redirect
    default_page_id: String,

    /// Root of the old content tree
    old_files_dir: PathBuf,

    /// Root of the new content tree
    new_files_dir: PathBuf,

    /// Directory to populate with redirect stubs (created if absent)
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(failed_writes) if failed_writes == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Drive the full pipeline. Returns the number of failed stub writes.
fn run(cli: &Cli) -> Result<usize, Box<dyn std::error::Error>> {
    if cli.base_url.cannot_be_a_base() {
        return Err(format!(
            "base URL {} is not hierarchical; expected something like https://docs.example.com/v2",
            cli.base_url
        )
        .into());
    }
    ensure_dir(&cli.old_files_dir)?;
    ensure_dir(&cli.new_files_dir)?;

    println!("==> Indexing old tree {}", cli.old_files_dir.display());
    let old = scan::scan_tree(&cli.old_files_dir);
    output::print_scan_report(&old);

    println!("==> Indexing new tree {}", cli.new_files_dir.display());
    let new = scan::scan_tree(&cli.new_files_dir);
    output::print_scan_report(&new);

    println!("==> Correlating old pages against new");
    let unmatched = correlate::unmatched_permalinks(&old.index, &new.index);
    let matched = correlate::matched_count(&old.index, &new.index);
    output::print_unmatched(&unmatched);

    println!("==> Planning redirects");
    let plan = plan::plan_redirects(
        &old.index,
        &new.index,
        &cli.base_url,
        &cli.default_page_id,
    )?;
    output::print_plan(&plan);

    println!(
        "==> Writing redirect stubs \u{2192} {}",
        cli.output_dir.display()
    );
    std::fs::create_dir_all(&cli.output_dir)?;
    let report = emit::write_redirects(&plan.jobs, &cli.output_dir);

    output::print_summary(
        old.index.len(),
        new.index.len(),
        matched,
        unmatched.len(),
        &report,
    );

    Ok(report.failures.len())
}

/// Usage check: input roots must exist and be directories.
fn ensure_dir(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.is_dir() {
        return Err(format!("{} is not a directory", path.display()).into());
    }
    Ok(())
}
