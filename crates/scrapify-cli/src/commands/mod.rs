//! CLI command implementations.

pub mod config;
pub mod export_log;
pub mod process;
