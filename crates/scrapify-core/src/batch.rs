//! Sequential batch orchestration over profile URLs.

use tracing::error;

use crate::fetch::{HttpTransport, Scraper};
use crate::log::FailureRecord;
use crate::models::company::CompanyRecord;

/// Outcome classification for one processed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// A record was produced.
    Scraped,

    /// Clean no-record: exhausted retries, non-200, or identity missing.
    Invalid,

    /// Processing raised an unexpected condition.
    Erroneous,
}

/// Accumulated result of one run.
///
/// Every input URL lands in exactly one of the three buckets, so the bucket
/// sizes always sum to the number of URLs processed.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Successfully parsed records, in input order.
    pub records: Vec<CompanyRecord>,

    /// URLs for which no record could be produced.
    pub invalid_links: Vec<String>,

    /// URLs whose processing raised an unexpected condition.
    pub erroneous_links: Vec<String>,
}

impl RunReport {
    /// Total number of processed URLs across all three buckets.
    pub fn total(&self) -> usize {
        self.records.len() + self.invalid_links.len() + self.erroneous_links.len()
    }
}

/// Process every URL in order, classifying each into exactly one bucket.
///
/// Unexpected conditions are logged to the failure sink and do not stop the
/// run. `on_item` runs after each URL so callers can drive progress display.
pub fn run_batch<T, F>(scraper: &Scraper<T>, urls: &[String], mut on_item: F) -> RunReport
where
    T: HttpTransport,
    F: FnMut(&str, ItemOutcome),
{
    let mut report = RunReport::default();

    for url in urls {
        let outcome = match scraper.scrape_company(url) {
            Ok(Some(record)) => {
                report.records.push(record);
                ItemOutcome::Scraped
            }
            Ok(None) => {
                report.invalid_links.push(url.clone());
                ItemOutcome::Invalid
            }
            Err(e) => {
                error!("error processing {}: {}", url, e);
                let failure = FailureRecord::unexpected(url, e.to_string());
                if let Err(log_err) = scraper.sink().record(&failure) {
                    error!("failed to record failure for {}: {}", url, log_err);
                }
                report.erroneous_links.push(url.clone());
                ItemOutcome::Erroneous
            }
        };

        on_item(url, outcome);
    }

    report
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::LogError;
    use crate::extract::ProfileParser;
    use crate::fetch::testing::ScriptedTransport;
    use crate::log::{FailureCause, FailureSink, MemorySink};
    use crate::models::config::FetchConfig;

    const PROFILE_HTML: &str = concat!(
        "<html><body>",
        "<h1>Company information for Acme Widgets Ltd (01234567)</h1>",
        "<dl><dt>Registered office address</dt>",
        "<dd>1 Example Street, London, EC1A 1BB</dd></dl>",
        "</body></html>"
    );

    fn test_config() -> FetchConfig {
        FetchConfig {
            backoff_unit_ms: 1,
            ..FetchConfig::default()
        }
    }

    #[test]
    fn test_every_url_lands_in_exactly_one_bucket() {
        let sink = Arc::new(MemorySink::new());
        let scraper = Scraper::new(
            ScriptedTransport::new(vec![
                ScriptedTransport::ok(200, PROFILE_HTML),
                ScriptedTransport::ok(404, "missing"),
                ScriptedTransport::failed("connection refused"),
                ScriptedTransport::failed("connection refused"),
                ScriptedTransport::failed("connection refused"),
            ]),
            ProfileParser::new(),
            sink.clone(),
            test_config(),
        );

        let urls = vec![
            "http://registry/company/1".to_string(),
            "http://registry/company/2".to_string(),
            "http://registry/company/3".to_string(),
        ];
        let mut seen = Vec::new();
        let report = run_batch(&scraper, &urls, |url, outcome| {
            seen.push((url.to_string(), outcome));
        });

        assert_eq!(report.total(), urls.len());
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].company_code, "01234567");
        assert_eq!(
            report.invalid_links,
            vec![
                "http://registry/company/2".to_string(),
                "http://registry/company/3".to_string(),
            ]
        );
        assert!(report.erroneous_links.is_empty());

        let outcomes: Vec<ItemOutcome> = seen.iter().map(|(_, outcome)| *outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                ItemOutcome::Scraped,
                ItemOutcome::Invalid,
                ItemOutcome::Invalid,
            ]
        );
    }

    struct FailingSink;

    impl FailureSink for FailingSink {
        fn record(&self, _failure: &FailureRecord) -> Result<(), LogError> {
            Err(LogError::Append(std::io::Error::other("sink closed")))
        }
    }

    #[test]
    fn test_unexpected_condition_is_classified_erroneous() {
        let scraper = Scraper::new(
            ScriptedTransport::new(vec![
                ScriptedTransport::ok(200, PROFILE_HTML),
                ScriptedTransport::failed("connection refused"),
            ]),
            ProfileParser::new(),
            Arc::new(FailingSink),
            test_config(),
        );

        let urls = vec![
            "http://registry/company/1".to_string(),
            "http://registry/company/2".to_string(),
        ];
        let report = run_batch(&scraper, &urls, |_, _| {});

        assert_eq!(report.total(), 2);
        assert_eq!(report.records.len(), 1);
        assert!(report.invalid_links.is_empty());
        assert_eq!(
            report.erroneous_links,
            vec!["http://registry/company/2".to_string()]
        );
    }

    #[test]
    fn test_batch_failures_reach_the_sink() {
        let sink = Arc::new(MemorySink::new());
        let scraper = Scraper::new(
            ScriptedTransport::new(vec![ScriptedTransport::ok(503, "busy")]),
            ProfileParser::new(),
            sink.clone(),
            test_config(),
        );

        let urls = vec!["http://registry/company/9".to_string()];
        run_batch(&scraper, &urls, |_, _| {});

        let failures = sink.records();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].cause, FailureCause::HttpStatus(503));
        assert_eq!(failures[0].url, "http://registry/company/9");
    }
}
