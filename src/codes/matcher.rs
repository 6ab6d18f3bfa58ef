use crate::codes::CodeType;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const CPT_PATTERN: &str = r"\b[0-9]{5}\b";
const HCPCS_PATTERN: &str = r"\b[A-Z][0-9]{4}\b";
const PLA_PATTERN: &str = r"\b[0-9]{4}U\b";

static CPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CPT_PATTERN).expect("Failed to compile CPT regex - this is a bug"));
static HCPCS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HCPCS_PATTERN).expect("Failed to compile HCPCS regex - this is a bug")
});
static PLA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLA_PATTERN).expect("Failed to compile PLA regex - this is a bug"));

fn pattern_for(code_type: CodeType) -> &'static Regex {
    match code_type {
        CodeType::Cpt => &CPT_RE,
        CodeType::Hcpcs => &HCPCS_RE,
        CodeType::Pla => &PLA_RE,
    }
}

/// Extracts the distinct billing codes found in a block of text
///
/// Patterns run in the order CPT, HCPCS, PLA. Within one pattern each code
/// is reported once, in order of first appearance. Codes are never
/// deduplicated across patterns.
///
/// # Arguments
///
/// * `text` - The document text to scan
///
/// # Returns
///
/// The `(type, code)` pairs found, or an empty vector
///
/// # Examples
///
/// ```
/// use medpolicy_scraper::codes::{extract_codes, CodeType};
///
/// let codes = extract_codes("Bill 99213 with J3490; repeat 99213.");
/// assert_eq!(
///     codes,
///     vec![
///         (CodeType::Cpt, "99213".to_string()),
///         (CodeType::Hcpcs, "J3490".to_string()),
///     ]
/// );
/// ```
pub fn extract_codes(text: &str) -> Vec<(CodeType, String)> {
    let mut codes = Vec::new();

    for code_type in CodeType::ALL {
        let mut seen = HashSet::new();
        for found in pattern_for(code_type).find_iter(text) {
            if seen.insert(found.as_str()) {
                codes.push((code_type, found.as_str().to_string()));
            }
        }
    }

    codes
}
