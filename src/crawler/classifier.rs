//! Link classification
//!
//! Decides which anchors on a seed page point at policy documents:
//!
//! | Lowercased href                          | Result  |
//! |------------------------------------------|---------|
//! | ends with `.pdf`                         | PDF     |
//! | contains `policy` or `activepolicypage`  | HTML    |
//! | anything else                            | dropped |
//!
//! Matching is by substring, so a privacy-policy footer link or a
//! `?type=policy` query parameter also qualifies as an HTML policy link.

use crate::crawler::fetcher::fetch_text;
use crate::crawler::parser::extract_anchors;
use crate::policy::{Link, LinkType};
use crate::url::{parse_seed_url, resolve_href};
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const PDF_SUFFIX: &str = ".pdf";
const POLICY_MARKERS: &[&str] = &["policy", "activepolicypage"];

/// Classifies a raw href as a PDF or HTML policy link
///
/// # Examples
///
/// ```
/// use medpolicy_scraper::crawler::classify_href;
/// use medpolicy_scraper::LinkType;
///
/// assert_eq!(classify_href("/docs/Report.PDF"), Some(LinkType::Pdf));
/// assert_eq!(classify_href("/medical-policy/knee"), Some(LinkType::Html));
/// assert_eq!(classify_href("/contact"), None);
/// ```
pub fn classify_href(href: &str) -> Option<LinkType> {
    let lowered = href.trim().to_lowercase();

    if lowered.ends_with(PDF_SUFFIX) {
        Some(LinkType::Pdf)
    } else if POLICY_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        Some(LinkType::Html)
    } else {
        None
    }
}

/// Extracts the policy links from an already fetched seed page
///
/// # Arguments
///
/// * `html` - The seed page body
/// * `seed` - The seed URL as supplied, recorded as each link's source
/// * `base` - The parsed seed URL that relative hrefs resolve against
///
/// # Returns
///
/// Policy links in document order
pub fn classify_links(html: &str, seed: &str, base: &Url) -> Vec<Link> {
    let mut links = Vec::new();

    for anchor in extract_anchors(html) {
        let Some(link_type) = classify_href(&anchor.href) else {
            continue;
        };

        match resolve_href(&anchor.href, base) {
            Ok(absolute) => links.push(Link::new(&anchor.text, absolute, seed, link_type)),
            Err(e) => tracing::warn!("Skipping policy link: {}", e),
        }
    }

    links
}

/// Fetches a seed page and returns its policy links
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `seed` - The seed URL to fetch
/// * `timeout` - Timeout for the seed page request
///
/// # Returns
///
/// * `Ok(Vec<Link>)` - Policy links in document order, possibly empty
/// * `Err(ScrapeError)` - The seed is not a valid URL or could not be fetched
pub async fn get_links(
    client: &Client,
    seed: &str,
    timeout: Duration,
) -> Result<Vec<Link>, ScrapeError> {
    let base = parse_seed_url(seed)?;
    let page = fetch_text(client, base.as_str(), timeout).await?;

    let links = classify_links(&page.body, seed, &base);
    tracing::debug!(
        "{} policy links on {} (HTTP {})",
        links.len(),
        seed,
        page.status_code
    );

    Ok(links)
}
