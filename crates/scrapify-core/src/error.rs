//! Error types for the scrapify system.

use thiserror::Error;

/// Main error type for scrapify operations.
#[derive(Error, Debug)]
pub enum ScrapifyError {
    /// record extraction failed
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// fetching a profile page failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// reading or writing a workbook failed
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// the failure log could not be written
    #[error("Log error: {0}")]
    Log(#[from] LogError),

    /// underlying io failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// configuration was invalid or unreadable
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors during field extraction from page text.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// a required anchor label was not on the page
    #[error("anchor label not found: {0}")]
    MissingAnchor(String),

    /// the heading line carried no parenthesized company code
    #[error("no company code in heading: {0}")]
    MissingCode(String),

    /// the heading line carried no company name markers
    #[error("no company name in heading: {0}")]
    MissingName(String),
}

/// Errors raised by the HTTP transport.
#[derive(Error, Debug)]
pub enum FetchError {
    /// request could not complete (connection, timeout, DNS, body read)
    #[error("transport failure: {0}")]
    Transport(String),

    /// the client itself could not be constructed
    #[error("client setup failed: {0}")]
    Client(String),
}

/// Errors around workbook input and output.
#[derive(Error, Debug)]
pub enum SheetError {
    /// workbook could not be opened or read
    #[error("cannot open workbook: {0}")]
    Open(String),

    /// the workbook has no worksheets
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// the identifier column is missing from the header row
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// workbook could not be written
    #[error("cannot write workbook: {0}")]
    Write(String),
}

/// Errors around the failure log file.
#[derive(Error, Debug)]
pub enum LogError {
    /// log file could not be opened for appending
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// appending an entry failed
    #[error("cannot append to log file: {0}")]
    Append(#[from] std::io::Error),
}

/// Result type alias for scrapify operations.
pub type Result<T> = std::result::Result<T, ScrapifyError>;
