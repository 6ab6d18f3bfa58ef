//! medpolicy-scraper: billing code harvester for medical policy pages
//!
//! This crate fetches a set of seed pages, follows the links that look like
//! medical policy documents (PDF files or policy HTML pages), and pulls CPT,
//! HCPCS and PLA codes out of their text. Results come back as two tables:
//! the discovered policy links and a sorted code index.

pub mod codes;
pub mod config;
pub mod crawler;
pub mod output;
pub mod policy;
pub mod url;

use thiserror::Error;

/// Main error type for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("PDF extraction failed for {url}: {message}")]
    Pdf { url: String, message: String },

    #[error("PDF worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No seed URLs supplied")]
    EmptyInput,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Cannot resolve '{href}' against {base}")]
    Unresolvable { href: String, base: String },
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use codes::{extract_codes, CodeType};
pub use config::Config;
pub use crawler::Scraper;
pub use output::ScrapeReport;
pub use policy::{CodeEntry, Link, LinkType};
pub use url::{parse_seed_input, resolve_href};
