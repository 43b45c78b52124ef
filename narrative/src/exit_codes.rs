//! Stable exit codes for `narrative` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config, unreadable input, or `check` reported diagnostics.
pub const INVALID: i32 = 1;
/// `narrative show` found no descriptor in the directory.
pub const NOT_FOUND: i32 = 2;
