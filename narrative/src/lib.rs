//! Narrative descriptors for directory-organized requirement trees.
//!
//! A directory hierarchy models organizational units (epics containing
//! features containing scenarios). Each directory may hold one `*.narrative`
//! file giving the unit a title, an optional tracker card and a free-text
//! description. The crate is split the same way throughout:
//!
//! - **[`core`]**: Pure, deterministic logic (kind derivation, title parsing,
//!   issue-id scanning). No I/O.
//! - **[`io`]**: Filesystem discovery, the [`io::loader::NarrativeLoader`], and
//!   TOML configuration.
//!
//! [`tree`] walks a whole hierarchy on top of the loader; the `narrative`
//! binary exposes both on the command line.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod tree;
