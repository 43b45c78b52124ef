//! Loader configuration stored in `narrative.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::issues::{DEFAULT_ISSUE_PATTERNS, PatternIssueScanner};
use crate::core::parse::BodyOptions;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "narrative.toml";

/// Narrative loader configuration (TOML).
///
/// Missing fields default to the conventional tracker patterns and the
/// unmodified body layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NarrativeConfig {
    pub issues: IssueConfig,
    pub body: BodyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IssueConfig {
    /// Regular expressions recognizing issue ids on the title line.
    pub patterns: Vec<String>,
}

impl Default for IssueConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_ISSUE_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BodyConfig {
    /// Drop the line terminator after the last body line.
    pub trim_trailing_newline: bool,
}

impl NarrativeConfig {
    pub fn validate(&self) -> Result<()> {
        if self
            .issues
            .patterns
            .iter()
            .any(|pattern| pattern.trim().is_empty())
        {
            return Err(anyhow!("issues.patterns must not contain empty patterns"));
        }
        self.scanner()?;
        Ok(())
    }

    /// Build the issue scanner described by `issues.patterns`.
    pub fn scanner(&self) -> Result<PatternIssueScanner> {
        PatternIssueScanner::new(self.issues.patterns.as_slice())
    }

    pub fn body_options(&self) -> BodyOptions {
        BodyOptions {
            trim_trailing_newline: self.body.trim_trailing_newline,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `NarrativeConfig::default()`.
pub fn load_config(path: &Path) -> Result<NarrativeConfig> {
    if !path.exists() {
        let cfg = NarrativeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: NarrativeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &NarrativeConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
