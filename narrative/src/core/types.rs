//! Shared deterministic types for narrative loading.
//!
//! These types define stable contracts between the parser, the loader and
//! callers. They must not depend on external state or I/O.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Human-readable description of one organizational unit (epic, feature, ...).
///
/// Built once per load and never mutated afterwards, so fields are read through
/// accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    title: Option<String>,
    card_number: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    text: String,
}

impl Narrative {
    pub fn new(
        title: Option<String>,
        card_number: Option<String>,
        kind: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            title,
            card_number,
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Heading taken from the title line, if the file had one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// First issue identifier mentioned on the title line.
    pub fn card_number(&self) -> Option<&str> {
        self.card_number.as_deref()
    }

    /// Unit kind, derived from the descriptor file name (`epic.narrative` -> `epic`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Body text; every line carries a trailing line terminator.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Observable problem found while loading a narrative.
///
/// Diagnostics never abort a load: the loader degrades to "no narrative" and
/// hands these back (or logs them) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// More than one descriptor file in a single directory.
    MultipleNarrativeFiles {
        dir: PathBuf,
        chosen: PathBuf,
        ignored: Vec<PathBuf>,
    },
    /// Directory listing or descriptor read failed.
    Unreadable { path: PathBuf, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MultipleNarrativeFiles {
                dir,
                chosen,
                ignored,
            } => {
                let ignored = ignored
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "{}: multiple narrative files, using {} (ignored: {})",
                    dir.display(),
                    chosen.display(),
                    ignored
                )
            }
            Diagnostic::Unreadable { path, message } => {
                write!(f, "{}: unreadable narrative: {}", path.display(), message)
            }
        }
    }
}
