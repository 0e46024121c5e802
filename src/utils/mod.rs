//! Shared helpers for timestamps.

pub mod date;
pub mod mtime;
