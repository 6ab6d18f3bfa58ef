//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with a proper user agent string
//! - GET requests with a per-call timeout
//! - Error classification (timeout vs. other transport failures)
//!
//! HTTP status codes are not special-cased. A 404 page body is handed on
//! like any other; only transport failures are errors. Nothing is retried.

use crate::config::{FetchConfig, UserAgentConfig};
use crate::ScrapeError;
use reqwest::{Client, Response};
use std::time::Duration;

/// A fetched response body with its status code
#[derive(Debug)]
pub struct Fetched<T> {
    /// HTTP status code
    pub status_code: u16,

    /// Response body
    pub body: T,
}

/// Builds an HTTP client with proper configuration
///
/// The client follows redirects and decompresses gzip and brotli bodies.
/// Request timeouts are set per call, see [`fetch_text`] and [`fetch_bytes`].
///
/// # Example
///
/// ```no_run
/// use medpolicy_scraper::config::{FetchConfig, UserAgentConfig};
/// use medpolicy_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    fetch: &FetchConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .connect_timeout(fetch.connect_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and decodes the body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Upper bound for the whole request, body included
pub async fn fetch_text(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<Fetched<String>, ScrapeError> {
    let response = send(client, url, timeout).await?;
    let status_code = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| classify_error(url, e))?;

    Ok(Fetched { status_code, body })
}

/// Fetches a URL and returns the raw body bytes
pub async fn fetch_bytes(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<Fetched<Vec<u8>>, ScrapeError> {
    let response = send(client, url, timeout).await?;
    let status_code = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| classify_error(url, e))?;

    Ok(Fetched {
        status_code,
        body: body.to_vec(),
    })
}

async fn send(client: &Client, url: &str, timeout: Duration) -> Result<Response, ScrapeError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    if !response.status().is_success() {
        tracing::debug!("{} answered with HTTP {}", url, response.status());
    }

    Ok(response)
}

fn classify_error(url: &str, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
