//! Load the narrative describing a directory.
//!
//! [`NarrativeLoader::load_from`] never fails: a missing descriptor is a normal
//! condition and an unreadable one degrades to "no narrative" with a
//! [`Diagnostic`]. Callers that want the diagnostics as values use
//! [`NarrativeLoader::inspect`]; callers that want hard errors use
//! [`NarrativeLoader::try_load_from`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::core::issues::IssueScanner;
use crate::core::parse::{BodyOptions, narrative_kind, parse_narrative};
use crate::core::types::{Diagnostic, Narrative};
use crate::io::discover::find_narrative_files;

/// Result of loading with diagnostics captured instead of logged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inspection {
    pub narrative: Option<Narrative>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads `*.narrative` descriptors using an injected issue scanner.
#[derive(Debug, Clone)]
pub struct NarrativeLoader<S> {
    scanner: S,
    options: BodyOptions,
}

impl<S: IssueScanner> NarrativeLoader<S> {
    pub fn new(scanner: S) -> Self {
        Self::with_options(scanner, BodyOptions::default())
    }

    pub fn with_options(scanner: S, options: BodyOptions) -> Self {
        Self { scanner, options }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Narrative for `dir`, or `None` if there is none or it cannot be read.
    ///
    /// Diagnostics are emitted as `warn` events.
    pub fn load_from(&self, dir: &Path) -> Option<Narrative> {
        let inspection = self.inspect(dir);
        for diagnostic in &inspection.diagnostics {
            warn!(dir = %dir.display(), "{diagnostic}");
        }
        inspection.narrative
    }

    /// Like [`Self::load_from`], returning diagnostics to the caller.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn inspect(&self, dir: &Path) -> Inspection {
        let mut diagnostics = Vec::new();
        let files = match find_narrative_files(dir) {
            Ok(files) => files,
            Err(err) => {
                diagnostics.push(Diagnostic::Unreadable {
                    path: dir.to_path_buf(),
                    message: format!("{err:#}"),
                });
                return Inspection {
                    narrative: None,
                    diagnostics,
                };
            }
        };

        let Some((chosen, rest)) = files.split_first() else {
            debug!("no narrative file");
            return Inspection::default();
        };
        if !rest.is_empty() {
            diagnostics.push(Diagnostic::MultipleNarrativeFiles {
                dir: dir.to_path_buf(),
                chosen: chosen.clone(),
                ignored: rest.to_vec(),
            });
        }

        let narrative = match self.load_file(chosen) {
            Ok(narrative) => Some(narrative),
            Err(err) => {
                diagnostics.push(Diagnostic::Unreadable {
                    path: chosen.clone(),
                    message: format!("{err:#}"),
                });
                None
            }
        };
        Inspection {
            narrative,
            diagnostics,
        }
    }

    /// Strict variant: I/O failures are returned as errors.
    ///
    /// `Ok(None)` means the directory has no descriptor. Extra descriptors are
    /// logged as a `warn` event; use [`Self::inspect`] to get them as values.
    pub fn try_load_from(&self, dir: &Path) -> Result<Option<Narrative>> {
        let files = find_narrative_files(dir)?;
        let Some((chosen, rest)) = files.split_first() else {
            return Ok(None);
        };
        if !rest.is_empty() {
            let diagnostic = Diagnostic::MultipleNarrativeFiles {
                dir: dir.to_path_buf(),
                chosen: chosen.clone(),
                ignored: rest.to_vec(),
            };
            warn!(dir = %dir.display(), "{diagnostic}");
        }
        self.load_file(chosen).map(Some)
    }

    /// Parse one descriptor file.
    pub fn load_file(&self, path: &Path) -> Result<Narrative> {
        let file_name = path
            .file_name()
            .with_context(|| format!("narrative path has no file name {}", path.display()))?
            .to_string_lossy();
        let kind = narrative_kind(&file_name);
        let contents =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let narrative = parse_narrative(kind, &contents, &self.scanner, self.options);
        debug!(
            path = %path.display(),
            kind = narrative.kind(),
            has_title = narrative.title().is_some(),
            card_number = ?narrative.card_number(),
            "narrative loaded"
        );
        Ok(narrative)
    }
}
