//! Fact source for the anteater fact page
//!
//! Provides the `FactSource` trait that the fact provider refreshes through,
//! and the production `HttpFactSource` that probes the fact page over HTTP.
//! The page content is never parsed: a successful request yields the fixed
//! fetched fact list, any failure yields the fallback list.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;

use super::catalog::{fallback_facts, fetched_facts};

/// URL of the fact page probed on refresh
pub const FACT_PAGE_URL: &str = "https://animalfactguide.com/animal-facts/giant-anteater/";

/// Request timeout; requests still in flight after this are aborted and
/// treated as failures
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Identifying client header sent with every request
pub const USER_AGENT: &str = concat!("antfacts/", env!("CARGO_PKG_VERSION"));

/// Minimum number of facts a refresh is allowed to yield before being
/// topped up from the fallback list
const MIN_FACTS: usize = 5;

/// Number of facts to top up to when a refresh yields too few
const TOP_UP_TARGET: usize = 10;

/// Errors that can occur when probing the fact page
///
/// These never escape the fetch path; they are logged and mapped to the
/// fallback fact list.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed (connection error or timeout)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The fact page responded with a non-success status
    #[error("fact page returned status {0}")]
    BadStatus(StatusCode),
}

/// A source of fact lists for the fact provider
///
/// Implementations must not fail: any retrieval problem is handled
/// internally by falling back to a known list.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Retrieves the current fact list
    async fn fetch_facts(&self) -> Vec<String>;
}

/// Production fact source backed by the anteater fact page
#[derive(Debug, Clone)]
pub struct HttpFactSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl Default for HttpFactSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFactSource {
    /// Creates a new HttpFactSource pointed at the fact page
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            url: FACT_PAGE_URL.to_string(),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Creates a new HttpFactSource with a custom URL (for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Overrides the request timeout (for testing)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Probes the fact page
    ///
    /// The response body is read but its content is discarded; only the
    /// status matters.
    async fn probe_fact_page(&self) -> Result<(), SourceError> {
        let response = self
            .client
            .get(&self.url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::BadStatus(status));
        }

        // Drain the body without interpreting it.
        let _ = response.text().await?;

        Ok(())
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    async fn fetch_facts(&self) -> Vec<String> {
        match self.probe_fact_page().await {
            Ok(()) => {
                let facts = fetched_facts().iter().map(|f| f.to_string()).collect();
                ensure_minimum(facts)
            }
            Err(err) => {
                tracing::warn!("failed to fetch anteater facts: {err}");
                fallback_facts().iter().map(|f| f.to_string()).collect()
            }
        }
    }
}

/// Tops up a fact list that came back too small with leading fallback facts
///
/// Unreachable with the fixed fetched list, which always has 13 entries.
fn ensure_minimum(facts: Vec<String>) -> Vec<String> {
    if facts.len() >= MIN_FACTS {
        return facts;
    }

    let mut topped_up = facts;
    let missing = TOP_UP_TARGET - topped_up.len();
    topped_up.extend(
        fallback_facts()
            .iter()
            .take(missing)
            .map(|f| f.to_string()),
    );
    topped_up
}
