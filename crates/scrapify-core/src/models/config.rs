//! Configuration structures for the scraping pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default registry profile URL base; the padded company number is appended.
pub const DEFAULT_REGISTRY_BASE: &str =
    "https://find-and-update.company-information.service.gov.uk/company";

/// Main configuration for scrapify.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapifyConfig {
    /// HTTP fetch configuration.
    pub fetch: FetchConfig,

    /// Registry URL and input-workbook configuration.
    pub registry: RegistryConfig,

    /// Failure-log configuration.
    pub log: LogConfig,
}

impl Default for ScrapifyConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            registry: RegistryConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// HTTP fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum attempts per URL for transport-level failures.
    pub max_attempts: u32,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Backoff unit in milliseconds; the sleep after attempt `n` (0-based)
    /// is `backoff_unit_ms * 2^n`.
    pub backoff_unit_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            timeout_secs: 30,
            user_agent: "Mozilla/5.0".to_string(),
            backoff_unit_ms: 1000,
        }
    }
}

/// Registry URL and input-workbook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Profile URL base the padded company number is appended to.
    pub url_base: String,

    /// Header title of the identifier column in the input workbook.
    pub identifier_column: String,

    /// Width identifiers are zero-padded to.
    pub identifier_width: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url_base: DEFAULT_REGISTRY_BASE.to_string(),
            identifier_column: "Company Number".to_string(),
            identifier_width: 8,
        }
    }
}

/// Failure-log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Path of the append-only failure log.
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("scrapify_log.txt"),
        }
    }
}

impl ScrapifyConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, io::Error> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }

    /// Profile URL for a zero-padded company number.
    pub fn company_url(&self, identifier: &str) -> String {
        format!(
            "{}/{}",
            self.registry.url_base.trim_end_matches('/'),
            identifier
        )
    }
}
