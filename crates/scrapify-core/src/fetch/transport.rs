//! HTTP transport over a blocking client.

use std::time::Duration;

use crate::error::FetchError;
use crate::models::config::FetchConfig;

/// One fetched response: status code plus body text.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP GET capability.
///
/// The production implementation wraps `reqwest::blocking`; tests script
/// responses and failures instead of hitting the network.
pub trait HttpTransport {
    /// Issue one GET request and read the body.
    fn get(&self, url: &str) -> Result<TransportResponse, FetchError>;
}

/// Transport backed by a shared blocking reqwest client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a client with the configured timeout and user agent.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
