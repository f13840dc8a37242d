//! Document retrieval
//!
//! This module handles everything between a URL and a [`Page`]:
//! - The [`Transport`] seam that returns a document body for a URL
//! - The reqwest-backed [`HttpTransport`] used by real crawls
//! - Building the HTTP client with the configured user agent and deadline
//! - [`fetch_page`], which runs the transport and the HTML extraction
//!
//! There is no retry logic. A transport failure (connection error, timeout,
//! interrupted body) is a [`FetchError`] and any partial content is discarded.
//! The HTTP status is not inspected: a 404 or 500 response still yields the
//! page its body describes.

use crate::config::Config;
use crate::crawler::parser::extract_page;
use crate::state::Page;
use crate::{FetchError, FetchResult};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Source of raw documents
///
/// Implementations must be shareable across the crawl's concurrent tasks.
pub trait Transport: Send + Sync + 'static {
    /// Retrieves the body of the document at `url`
    fn get(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Transport that issues HTTP GET requests
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a transport from the crawler configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        build_http_client(config).map(Self::new)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let transport_error = |e: reqwest::Error| FetchError::new(url, e);

        // Any status counts as retrieved; error pages are recorded like others
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        response.text().await.map_err(transport_error)
    }
}

/// Formats the user agent string: `Name/Version` with an optional
/// `(+ContactURL)` suffix
pub fn user_agent_string(config: &Config) -> String {
    let ua = &config.user_agent;
    match &ua.contact_url {
        Some(contact) => format!("{}/{} (+{})", ua.crawler_name, ua.crawler_version, contact),
        None => format!("{}/{}", ua.crawler_name, ua.crawler_version),
    }
}

/// Builds an HTTP client with proper configuration
///
/// Without `request-timeout-secs` the client has no deadline, and a hung
/// server stalls the task fetching from it indefinitely.
///
/// # Example
///
/// ```no_run
/// use sumi_reach::config::Config;
/// use sumi_reach::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(user_agent_string(config))
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.crawler.request_timeout_secs {
        builder = builder
            .timeout(Duration::from_secs(secs))
            .connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL and extracts its page
///
/// # Returns
///
/// * `Ok(Page)` - The document was retrieved; extraction itself cannot fail
/// * `Err(FetchError)` - The transport could not retrieve the document
pub async fn fetch_page<T: Transport>(transport: &T, url: &str) -> FetchResult<Page> {
    let body = transport.get(url).await?;
    Ok(extract_page(&body))
}
