//! Policy link and code index records
//!
//! These are the rows of the two tables a scrape produces. Both are plain
//! values: created once and never mutated afterward.

mod entry;
mod link;

pub use entry::CodeEntry;
pub use link::{Link, LinkType, UNTITLED};
