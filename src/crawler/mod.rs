//! Crawler module for policy link discovery and code extraction
//!
//! This module contains the scrape pipeline:
//! - HTTP fetching with per-request timeouts
//! - HTML parsing for anchors and visible text
//! - Link classification into PDF and HTML policy links
//! - Code extraction from PDF and HTML policy documents
//! - Overall scrape coordination

mod cache;
mod classifier;
mod coordinator;
mod extractor;
mod fetcher;
mod parser;

pub use cache::LinkCache;
pub use classifier::{classify_href, classify_links, get_links};
pub use coordinator::{run_scrape, Scraper};
pub use extractor::{
    extract_codes_from_link, extract_html_codes, extract_pdf_codes, select_path, ExtractionPath,
};
pub use fetcher::{build_http_client, fetch_bytes, fetch_text, Fetched};
pub use parser::{extract_anchors, extract_visible_text, Anchor};
