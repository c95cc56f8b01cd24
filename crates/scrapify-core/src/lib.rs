//! Core library for scraping UK company-registry profiles into workbooks.
//!
//! This crate provides:
//! - Visible-text flattening of profile pages into ordered line sequences
//! - Label-anchored field extraction into company records
//! - Blocking HTTP fetch with retry, backoff, and a structured failure log
//! - Sequential batch orchestration with three-way outcome classification
//! - Workbook input (company numbers) and styled workbook output

pub mod batch;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod log;
pub mod models;
pub mod page;
pub mod sheet;

pub use batch::{ItemOutcome, RunReport, run_batch};
pub use error::{Result, ScrapifyError};
pub use extract::ProfileParser;
pub use fetch::{HttpTransport, ReqwestTransport, Scraper, TransportResponse};
pub use log::{FailureCause, FailureRecord, FailureSink, MemorySink, RunLog};
pub use models::company::CompanyRecord;
pub use models::config::ScrapifyConfig;
pub use page::PageText;
