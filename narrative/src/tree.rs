//! Read-only walk over a hierarchy of narrative directories.
//!
//! Each directory is one organizational unit (epic, feature, ...); its
//! narrative, if any, comes from [`NarrativeLoader::load_from`]. The walk never
//! modifies the tree.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::issues::IssueScanner;
use crate::core::types::Narrative;
use crate::io::loader::NarrativeLoader;

/// One directory in the hierarchy that carries a narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    /// Path relative to the scanned root (`""` for the root itself).
    pub path: PathBuf,
    /// Nesting depth below the root (root = 0).
    pub depth: usize,
    pub narrative: Narrative,
}

/// Walk `root` depth-first in file-name order and collect every narrative.
///
/// Unreadable subdirectories are skipped with a warning.
pub fn scan_tree<S: IssueScanner>(
    root: &Path,
    loader: &NarrativeLoader<S>,
) -> Result<Vec<TreeEntry>> {
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_type().is_dir());
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let Some(narrative) = loader.load_from(entry.path()) else {
            continue;
        };
        let path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        entries.push(TreeEntry {
            path,
            depth: entry.depth(),
            narrative,
        });
    }
    debug!(root = %root.display(), count = entries.len(), "tree scanned");
    Ok(entries)
}
