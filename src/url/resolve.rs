use crate::UrlError;
use url::Url;

/// Parses a seed URL, accepting only HTTP and HTTPS
///
/// # Arguments
///
/// * `seed` - The seed URL as supplied by the caller
///
/// # Returns
///
/// * `Ok(Url)` - The parsed seed
/// * `Err(UrlError)` - The seed is malformed or uses another scheme
pub fn parse_seed_url(seed: &str) -> Result<Url, UrlError> {
    let url = Url::parse(seed.trim()).map_err(|e| UrlError::Parse(format!("{}: {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    Ok(url)
}

/// Resolves an anchor href against the page it appeared on
///
/// Standard relative reference resolution applies: absolute hrefs are kept,
/// scheme-relative (`//host/x`), root-relative (`/x`), path-relative (`x`)
/// and fragment-only (`#x`) hrefs are joined onto `base`.
///
/// # Examples
///
/// ```
/// use medpolicy_scraper::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://a.com/b/").unwrap();
/// assert_eq!(resolve_href("/docs/x.pdf", &base).unwrap(), "https://a.com/docs/x.pdf");
/// assert_eq!(resolve_href("y.pdf", &base).unwrap(), "https://a.com/b/y.pdf");
/// ```
pub fn resolve_href(href: &str, base: &Url) -> Result<String, UrlError> {
    base.join(href.trim())
        .map(|resolved| resolved.to_string())
        .map_err(|_| UrlError::Unresolvable {
            href: href.to_string(),
            base: base.to_string(),
        })
}
