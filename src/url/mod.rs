//! URL handling module
//!
//! This module turns the free-text seed input into a list of seed URLs and
//! resolves anchor hrefs found on a page into absolute URLs.

mod resolve;
mod seeds;

pub use resolve::{parse_seed_url, resolve_href};
pub use seeds::parse_seed_input;
