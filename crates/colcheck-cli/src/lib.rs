//! CLI library components for colcheck.

pub mod commands;
pub mod logging;
pub mod types;
