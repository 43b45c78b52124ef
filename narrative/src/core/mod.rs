//! Deterministic, pure logic shared by the narrative loader.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! strings and return deterministic outputs suitable for tests.

pub mod issues;
pub mod parse;
pub mod types;
