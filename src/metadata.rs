//! Frontmatter extraction for content files.
//!
//! Content files carry an optional YAML frontmatter block fenced by `---`
//! lines. Three fields matter for redirect generation:
//!
//! - `permalink`: the stable key correlating the same logical page across the
//!   old and new trees. Without it a file cannot participate in matching.
//! - `id`: the identifier composing the page's URL on the new site.
//! - `redirect_from`: legacy paths that should also redirect to this page.
//!
//! ## Tolerance at the boundary
//!
//! Frontmatter in a real docs tree is messy: fields are missing, values have
//! surprising YAML types, `redirect_from` is sometimes a scalar. All coercion
//! happens here, once, into the typed [`PageMeta`] — the rest of the pipeline
//! never sees raw YAML. The rules:
//!
//! - `id` / `permalink`: taken only when YAML strings, otherwise absent.
//! - `redirect_from`: taken only when a sequence, and only its string items;
//!   a scalar or mapping value means "no aliases", never an error.
//! - A file that is not markdown, or has no (closed) frontmatter fence,
//!   yields `Ok(None)` — it simply doesn't participate.
//!
//! Only unreadable files and YAML the parser rejects outright surface as
//! errors, and the scanner downgrades those to warnings.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid frontmatter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Typed extraction result: the three redirect-relevant fields, coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub id: Option<String>,
    pub permalink: Option<String>,
    pub aliases: Vec<String>,
}

/// Extensions recognized as content files. Everything else is skipped.
const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Raw frontmatter shape. Every field is a [`serde_yaml::Value`] so a single
/// oddly-typed field never fails the whole block; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontmatter {
    id: serde_yaml::Value,
    permalink: serde_yaml::Value,
    redirect_from: serde_yaml::Value,
}

/// Extract redirect metadata from a content file.
///
/// Returns `Ok(None)` for non-markdown files and for markdown files without
/// a frontmatter block — both are ordinary, not errors.
pub fn extract(path: &Path) -> Result<Option<PageMeta>, MetadataError> {
    if !is_content_file(path) {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let Some(yaml) = frontmatter_block(&content) else {
        return Ok(None);
    };

    // An empty block is metadata with no fields, not a parse error.
    if yaml.trim().is_empty() {
        return Ok(Some(PageMeta::default()));
    }

    let raw: RawFrontmatter = serde_yaml::from_str(yaml)?;
    Ok(Some(PageMeta {
        id: string_field(&raw.id),
        permalink: string_field(&raw.permalink),
        aliases: string_list_field(&raw.redirect_from),
    }))
}

/// Whether the file extension marks a content file.
pub fn is_content_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    CONTENT_EXTENSIONS.contains(&ext.as_str())
}

/// Slice out the YAML between the opening `---` fence and its closing
/// `---`/`...` line. `None` if the file doesn't open with a fence or the
/// fence is never closed.
fn frontmatter_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

fn string_field(value: &serde_yaml::Value) -> Option<String> {
    value.as_str().map(String::from)
}

fn string_list_field(value: &serde_yaml::Value) -> Vec<String> {
    match value.as_sequence() {
        Some(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        None => Vec::new(),
    }
}
