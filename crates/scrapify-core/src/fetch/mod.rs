//! Fetch-with-retry over profile URLs.

mod transport;

pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::extract::ProfileParser;
use crate::log::{FailureRecord, FailureSink};
use crate::models::company::CompanyRecord;
use crate::models::config::FetchConfig;
use crate::page::PageText;

/// Sequential profile scraper.
///
/// One blocking request at a time. Transport failures are recorded and
/// retried with exponential backoff up to the configured attempt limit;
/// a non-200 response is recorded once and never retried.
pub struct Scraper<T: HttpTransport> {
    transport: T,
    parser: ProfileParser,
    sink: Arc<dyn FailureSink>,
    config: FetchConfig,
}

impl<T: HttpTransport> Scraper<T> {
    pub fn new(
        transport: T,
        parser: ProfileParser,
        sink: Arc<dyn FailureSink>,
        config: FetchConfig,
    ) -> Self {
        Self {
            transport,
            parser,
            sink,
            config,
        }
    }

    /// Failure sink shared with the batch loop.
    pub fn sink(&self) -> &dyn FailureSink {
        self.sink.as_ref()
    }

    /// Fetch one profile URL and extract its record.
    ///
    /// `Ok(None)` is the clean no-record outcome: exhausted retries, a
    /// non-200 status, or a page without the identity anchors. `Err` is
    /// reserved for conditions the caller classifies separately, such as
    /// the failure log itself becoming unwritable.
    pub fn scrape_company(&self, url: &str) -> Result<Option<CompanyRecord>> {
        let mut attempt: u32 = 0;

        while attempt < self.config.max_attempts {
            match self.transport.get(url) {
                Ok(response) if response.status == 200 => {
                    let page = PageText::from_html(&response.body);
                    return match self.parser.parse(&page) {
                        Ok(record) => Ok(Some(record)),
                        Err(e) => {
                            debug!("no identity on page for {}: {}", url, e);
                            Ok(None)
                        }
                    };
                }
                Ok(response) => {
                    self.sink
                        .record(&FailureRecord::http_status(url, response.status))?;
                    warn!("status {} for {}", response.status, url);
                    return Ok(None);
                }
                Err(e) => {
                    self.sink
                        .record(&FailureRecord::transport(url, attempt + 1, e.to_string()))?;
                    warn!("request failed for {} (attempt {}): {}", url, attempt + 1, e);
                    thread::sleep(self.backoff_delay(attempt));
                    attempt += 1;
                }
            }
        }

        Ok(None)
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        Duration::from_millis(self.config.backoff_unit_ms.saturating_mul(factor))
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::testing::ScriptedTransport;
    use super::*;
    use crate::log::{FailureCause, MemorySink};

    const PROFILE_HTML: &str = concat!(
        "<html><body>",
        "<h1>Company information for Acme Widgets Ltd (01234567)</h1>",
        "<dl><dt>Registered office address</dt>",
        "<dd>1 Example Street, London, EC1A 1BB</dd>",
        "<dt>Company status</dt><dd>Active</dd></dl>",
        "</body></html>"
    );

    fn test_config() -> FetchConfig {
        FetchConfig {
            backoff_unit_ms: 1,
            ..FetchConfig::default()
        }
    }

    fn scraper_with(
        transport: ScriptedTransport,
        sink: Arc<MemorySink>,
    ) -> Scraper<ScriptedTransport> {
        Scraper::new(transport, ProfileParser::new(), sink, test_config())
    }

    #[test]
    fn test_success_on_final_attempt() {
        let sink = Arc::new(MemorySink::new());
        let scraper = scraper_with(
            ScriptedTransport::new(vec![
                ScriptedTransport::failed("connection refused"),
                ScriptedTransport::failed("timed out"),
                ScriptedTransport::ok(200, PROFILE_HTML),
            ]),
            sink.clone(),
        );

        let record = scraper
            .scrape_company("http://registry/company/01234567")
            .unwrap()
            .expect("third attempt should produce a record");

        assert_eq!(record.company_code, "01234567");
        assert_eq!(record.company_status, "Active");

        let failures = sink.records();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].attempt, Some(1));
        assert_eq!(failures[1].attempt, Some(2));
    }

    #[test]
    fn test_exhausted_attempts_yield_no_record() {
        let sink = Arc::new(MemorySink::new());
        let scraper = scraper_with(
            ScriptedTransport::new(vec![
                ScriptedTransport::failed("no route to host"),
                ScriptedTransport::failed("no route to host"),
                ScriptedTransport::failed("no route to host"),
            ]),
            sink.clone(),
        );

        let record = scraper.scrape_company("http://registry/company/1").unwrap();

        assert!(record.is_none());
        assert_eq!(sink.records().len(), 3);
    }

    #[test]
    fn test_non_success_status_is_not_retried() {
        let sink = Arc::new(MemorySink::new());
        let scraper = scraper_with(
            ScriptedTransport::new(vec![ScriptedTransport::ok(404, "missing")]),
            sink.clone(),
        );

        let record = scraper.scrape_company("http://registry/company/2").unwrap();

        assert!(record.is_none());
        let failures = sink.records();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].cause, FailureCause::HttpStatus(404));
        assert_eq!(failures[0].attempt, None);
    }

    #[test]
    fn test_page_without_identity_is_a_clean_no_record() {
        let sink = Arc::new(MemorySink::new());
        let scraper = scraper_with(
            ScriptedTransport::new(vec![ScriptedTransport::ok(
                200,
                "<html><body><p>Page not found</p></body></html>",
            )]),
            sink.clone(),
        );

        let record = scraper.scrape_company("http://registry/company/3").unwrap();

        assert!(record.is_none());
        assert!(sink.records().is_empty());
    }
}
