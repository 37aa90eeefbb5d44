//! Shared types passed between pipeline stages.
//!
//! Stage boundaries are value boundaries: the scanner produces a
//! [`PermalinkIndex`] per tree, the planner consumes two of them by reference
//! and produces [`RedirectJob`]s, and the emitter consumes the jobs. Nothing
//! here is mutated after its producing stage finishes.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::PathBuf;
use url::Url;

/// One content file with usable frontmatter, as registered in an index.
///
/// `source_path` is always relative to the tree root it was scanned from, so
/// output paths can be derived from it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// Path relative to the scanned tree root.
    pub source_path: PathBuf,
    /// Identifier on the new site, used to build destination URLs.
    /// Empty means this entry can be a redirect source but never a destination.
    pub id: String,
    /// Legacy paths from `redirect_from` that should also redirect here.
    /// Only meaningful on old-tree entries.
    pub aliases: Vec<String>,
}

/// Permalink-keyed lookup of [`ContentEntry`]s, built once per tree.
///
/// Invariant: at most one entry per permalink; the first registration wins.
/// Backed by a `BTreeMap` so iteration order — and therefore the planned job
/// sequence and every diagnostic — is stable across runs.
#[derive(Debug, Default)]
pub struct PermalinkIndex {
    entries: BTreeMap<String, ContentEntry>,
}

impl PermalinkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry unless the permalink is already claimed.
    ///
    /// On conflict the index is left untouched and the source path of the
    /// entry holding the permalink is returned, for the caller's diagnostic.
    pub fn insert(&mut self, permalink: String, entry: ContentEntry) -> Result<(), PathBuf> {
        match self.entries.entry(permalink) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
            btree_map::Entry::Occupied(held) => Err(held.get().source_path.clone()),
        }
    }

    pub fn get(&self, permalink: &str) -> Option<&ContentEntry> {
        self.entries.get(permalink)
    }

    pub fn contains(&self, permalink: &str) -> bool {
        self.entries.contains_key(permalink)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in permalink order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContentEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Permalinks in order.
    pub fn permalinks(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// One redirect stub to write: a path under the output root and the fully
/// composed destination URL. Produced by the planner, consumed by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectJob {
    /// Output file path, relative to the output root.
    pub output_path: PathBuf,
    /// Absolute destination URL.
    pub destination: Url,
}
