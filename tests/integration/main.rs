//! Integration tests for the scraper
//!
//! These tests use wiremock to create mock HTTP servers and test the full
//! scrape cycle end-to-end.

mod common;
mod scrape_tests;
