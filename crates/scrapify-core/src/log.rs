//! Structured failure log.
//!
//! Fetch and batch failures are recorded through an explicit sink rather
//! than global logging state, so runs can be asserted on in tests and the
//! resulting file can be exported as-is.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

use crate::error::LogError;

/// Why a URL failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// Non-200 response status.
    HttpStatus(u16),

    /// Transport-level failure: connection, timeout, DNS, body read.
    Transport(String),

    /// Unexpected condition caught by the batch loop.
    Unexpected(String),
}

/// One failure entry: which URL, which attempt, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub url: String,

    /// 1-based attempt number for transport failures, `None` otherwise.
    pub attempt: Option<u32>,

    pub cause: FailureCause,
}

impl FailureRecord {
    /// A non-200 response.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            attempt: None,
            cause: FailureCause::HttpStatus(status),
        }
    }

    /// A failed request attempt.
    pub fn transport(url: impl Into<String>, attempt: u32, cause: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            attempt: Some(attempt),
            cause: FailureCause::Transport(cause.into()),
        }
    }

    /// An unexpected per-item condition.
    pub fn unexpected(url: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            attempt: None,
            cause: FailureCause::Unexpected(cause.into()),
        }
    }
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            FailureCause::HttpStatus(status) => {
                write!(f, "HTTP status code: {} for URL: {}", status, self.url)
            }
            FailureCause::Transport(cause) => write!(
                f,
                "Request failed (attempt {}): {} for URL: {}",
                self.attempt.unwrap_or(1),
                cause,
                self.url
            ),
            FailureCause::Unexpected(cause) => {
                write!(f, "Error processing {}: {}", self.url, cause)
            }
        }
    }
}

/// Sink for failure records.
///
/// The production sink appends to the run-log file; tests substitute an
/// in-memory capture.
pub trait FailureSink {
    /// Record one failure.
    fn record(&self, failure: &FailureRecord) -> Result<(), LogError>;
}

/// Append-only failure log backed by a file.
///
/// Each entry is one line: `2024-05-01 14:30:00 - ERROR - <message>`.
pub struct RunLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl RunLog {
    /// Open the log file for appending, creating it if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LogError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FailureSink for RunLog {
    fn record(&self, failure: &FailureRecord) -> Result<(), LogError> {
        let line = format!(
            "{} - ERROR - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            failure
        );

        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

/// Sink that buffers records in memory instead of writing a file.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<FailureRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<FailureRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl FailureSink for MemorySink {
    fn record(&self, failure: &FailureRecord) -> Result<(), LogError> {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(failure.clone());

        Ok(())
    }
}
