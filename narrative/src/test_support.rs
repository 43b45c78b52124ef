//! Test-only helpers for building narrative directory fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Temporary directory tree populated with descriptor files.
pub struct NarrativeTree {
    temp: TempDir,
}

impl NarrativeTree {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Create `dir` (relative, may be empty) and return its absolute path.
    pub fn dir(&self, dir: &str) -> Result<PathBuf> {
        let path = self.temp.path().join(dir);
        fs::create_dir_all(&path).with_context(|| format!("create {}", path.display()))?;
        Ok(path)
    }

    /// Write `file_name` with `lines` (each newline-terminated) inside `dir`.
    pub fn write(&self, dir: &str, file_name: &str, lines: &[&str]) -> Result<PathBuf> {
        let path = self.dir(dir)?.join(file_name);
        let contents: String = lines.iter().map(|line| format!("{line}\n")).collect();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}

/// Scanner that returns the same ids for every line.
#[derive(Debug, Clone, Default)]
pub struct FixedScanner(pub Vec<String>);

impl FixedScanner {
    pub fn new(ids: &[&str]) -> Self {
        Self(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl crate::core::issues::IssueScanner for FixedScanner {
    fn issues_in(&self, _line: &str) -> Vec<String> {
        self.0.clone()
    }
}
