//! Issue-identifier recognition for narrative title lines.
//!
//! The loader only needs "which tracker ids does this line mention, in order",
//! so the seam is the [`IssueScanner`] trait. Tracker-specific recognition is
//! configured by the caller; [`PatternIssueScanner`] covers the common case of
//! one or more regular expressions.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

/// Short `#123` form and full `PROJ-123` form.
pub const DEFAULT_ISSUE_PATTERNS: &[&str] = &[r"#\d+", r"\b[A-Z][A-Z0-9_]+-\d+\b"];

/// Abstraction over issue-tracker id recognition.
pub trait IssueScanner {
    /// Return the identifiers mentioned in `line`, ordered by appearance.
    fn issues_in(&self, line: &str) -> Vec<String>;
}

impl<F> IssueScanner for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn issues_in(&self, line: &str) -> Vec<String> {
        self(line)
    }
}

/// Scanner that never recognizes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIssues;

impl IssueScanner for NoIssues {
    fn issues_in(&self, _line: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Scanner driven by a list of regular expressions.
///
/// Matches from all patterns are merged by start offset. An id mentioned twice
/// is reported once, at its first position.
#[derive(Debug, Clone)]
pub struct PatternIssueScanner {
    patterns: Vec<Regex>,
}

impl PatternIssueScanner {
    pub fn new<P: AsRef<str>>(patterns: &[P]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).with_context(|| format!("compile issue pattern '{pattern}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}

impl Default for PatternIssueScanner {
    fn default() -> Self {
        Self::new(DEFAULT_ISSUE_PATTERNS).expect("default issue patterns compile")
    }
}

impl IssueScanner for PatternIssueScanner {
    fn issues_in(&self, line: &str) -> Vec<String> {
        let mut found: Vec<(usize, usize, &str)> = self
            .patterns
            .iter()
            .flat_map(|pattern| pattern.find_iter(line))
            .map(|m| (m.start(), m.end(), m.as_str()))
            .collect();
        // Earliest first; on a shared start prefer the longer match.
        found.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)));

        let mut seen = HashSet::new();
        found
            .into_iter()
            .filter(|(_, _, id)| seen.insert(*id))
            .map(|(_, _, id)| id.to_string())
            .collect()
    }
}

/// First identifier the scanner reports for `line`.
pub fn first_issue<S: IssueScanner + ?Sized>(scanner: &S, line: &str) -> Option<String> {
    scanner.issues_in(line).into_iter().next()
}
