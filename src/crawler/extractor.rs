//! Content extraction from policy documents
//!
//! Each classified link is read through one of two paths:
//! - PDF: download, stage into a private temporary file, extract page text
//! - HTML: download, parse, collect the visible text
//!
//! Both paths feed the text to [`extract_codes`]. Failures at any stage are
//! swallowed: the link contributes no codes and the batch carries on. One
//! malformed PDF must not stop a scrape.

use crate::codes::{extract_codes, CodeType};
use crate::config::FetchConfig;
use crate::crawler::fetcher::{fetch_bytes, fetch_text};
use crate::crawler::parser::extract_visible_text;
use crate::policy::{Link, LinkType};
use crate::ScrapeError;
use reqwest::Client;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Which extractor runs for a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPath {
    Pdf,
    Html,
}

/// Chooses the extraction path for a link
///
/// PDF links yield `None` when PDF crawling is skipped. Such links stay in
/// the link table but contribute nothing to the code index.
pub fn select_path(link: &Link, skip_pdf: bool) -> Option<ExtractionPath> {
    match link.link_type {
        LinkType::Pdf if skip_pdf => None,
        LinkType::Pdf => Some(ExtractionPath::Pdf),
        LinkType::Html => Some(ExtractionPath::Html),
    }
}

/// Extracts the billing codes from the document behind a link
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `fetch` - Timeouts for HTML and PDF requests
/// * `link` - The classified policy link
/// * `skip_pdf` - Whether PDF documents are skipped
///
/// # Returns
///
/// The `(type, code)` pairs found; empty when skipped or on any failure
pub async fn extract_codes_from_link(
    client: &Client,
    fetch: &FetchConfig,
    link: &Link,
    skip_pdf: bool,
) -> Vec<(CodeType, String)> {
    match select_path(link, skip_pdf) {
        Some(ExtractionPath::Pdf) => {
            extract_pdf_codes(client, &link.link, fetch.pdf_timeout()).await
        }
        Some(ExtractionPath::Html) => {
            extract_html_codes(client, &link.link, fetch.page_timeout()).await
        }
        None => {
            tracing::debug!("Skipping PDF extraction for {}", link.link);
            Vec::new()
        }
    }
}

/// Extracts codes from a PDF document, swallowing failures
pub async fn extract_pdf_codes(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Vec<(CodeType, String)> {
    match pdf_text(client, url, timeout).await {
        Ok(text) => extract_codes(&text),
        Err(e) => {
            tracing::debug!("PDF extraction failed: {}", e);
            Vec::new()
        }
    }
}

/// Extracts codes from an HTML policy page, swallowing failures
pub async fn extract_html_codes(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Vec<(CodeType, String)> {
    match fetch_text(client, url, timeout).await {
        Ok(page) => extract_codes(&extract_visible_text(&page.body)),
        Err(e) => {
            tracing::debug!("HTML extraction failed: {}", e);
            Vec::new()
        }
    }
}

async fn pdf_text(client: &Client, url: &str, timeout: Duration) -> Result<String, ScrapeError> {
    let download = fetch_bytes(client, url, timeout).await?;
    let owned_url = url.to_string();

    // A panic inside the PDF parser surfaces here as a JoinError
    tokio::task::spawn_blocking(move || pdf_bytes_to_text(&download.body, &owned_url)).await?
}

/// Extracts the text of a PDF document
///
/// The bytes are staged in a uniquely named temporary file owned by this
/// call and removed when it returns. Page texts are joined with single
/// spaces in page order.
fn pdf_bytes_to_text(bytes: &[u8], url: &str) -> Result<String, ScrapeError> {
    let staged = stage_pdf(bytes)?;

    let pages =
        pdf_extract::extract_text_by_pages(staged.path()).map_err(|e| ScrapeError::Pdf {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    Ok(pages.join(" "))
}

fn stage_pdf(bytes: &[u8]) -> Result<NamedTempFile, ScrapeError> {
    let mut staged = tempfile::Builder::new()
        .prefix("medpolicy-")
        .suffix(".pdf")
        .tempfile()?;
    staged.write_all(bytes)?;
    staged.flush()?;
    Ok(staged)
}
