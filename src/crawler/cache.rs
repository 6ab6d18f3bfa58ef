//! Session link cache
//!
//! Seed pages are often repeated within one batch. Successful link lookups
//! are memoized by exact seed string for the lifetime of a [`Scraper`].
//! There is no expiry; a scrape session is short.
//!
//! [`Scraper`]: crate::crawler::Scraper

use crate::policy::Link;
use std::collections::HashMap;

/// Links discovered per seed URL
#[derive(Debug, Default)]
pub struct LinkCache {
    entries: HashMap<String, Vec<Link>>,
}

impl LinkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached links for a seed, if it was fetched before
    pub fn get(&self, seed: &str) -> Option<&[Link]> {
        self.entries.get(seed).map(Vec::as_slice)
    }

    /// Stores the links found on a seed page
    pub fn insert(&mut self, seed: &str, links: Vec<Link>) {
        self.entries.insert(seed.to_string(), links);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
