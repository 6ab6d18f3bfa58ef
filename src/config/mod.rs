//! Configuration module
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section has defaults, so a run without a
//! config file uses [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use medpolicy_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("PDF timeout: {}s", config.fetch.pdf_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, ScrapeConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
