/// Splits free-text seed input into individual seed URLs
///
/// Entries may be separated by commas, newlines, or both. Each token is
/// trimmed and empty tokens are dropped. Duplicates are kept and input
/// order is preserved.
///
/// # Examples
///
/// ```
/// use medpolicy_scraper::url::parse_seed_input;
///
/// let seeds = parse_seed_input("https://a.com, https://b.com\n\nhttps://c.com,");
/// assert_eq!(seeds, vec!["https://a.com", "https://b.com", "https://c.com"]);
/// ```
pub fn parse_seed_input(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
