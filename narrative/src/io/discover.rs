//! Locate `*.narrative` descriptor files inside a directory.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Reserved descriptor suffix, matched case-insensitively.
pub const NARRATIVE_SUFFIX: &str = ".narrative";

/// True if `file_name` ends with `.narrative` in any letter case.
pub fn is_narrative_file_name(file_name: &str) -> bool {
    is_narrative_os_name(OsStr::new(file_name))
}

/// Suffix check on the raw name, so names that are not UTF-8 still match.
pub fn is_narrative_os_name(file_name: &OsStr) -> bool {
    let bytes = file_name.as_encoded_bytes();
    let suffix = NARRATIVE_SUFFIX.as_bytes();
    bytes.len() >= suffix.len()
        && bytes[bytes.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// List descriptor files directly inside `dir` (non-recursive).
///
/// Only the entry name is checked. Results are sorted by file name so the
/// choice of "first" descriptor does not depend on listing order.
pub fn find_narrative_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))?;
    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list {}", dir.display()))?;
        if is_narrative_os_name(&entry.file_name()) {
            found.push(entry.path());
        }
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = found.len(), "narrative files found");
    Ok(found)
}
