//! Label-anchored field extraction from flattened profile pages.

mod parser;
pub mod rules;

pub use parser::ProfileParser;

use crate::error::ExtractError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
