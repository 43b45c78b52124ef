//! Filesystem side of narrative loading.

pub mod config;
pub mod discover;
pub mod loader;
