//! Workbook input and output.

mod reader;
mod writer;

pub use reader::{pad_identifier, read_identifiers};
pub use writer::write_report;
