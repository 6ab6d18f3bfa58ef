//! HTML parser for anchors and visible text
//!
//! Two views of a page are needed:
//! - every `<a href>` anchor, in document order, for link classification
//! - the page's visible text, for code extraction from HTML policies

use scraper::{Html, Selector};
use std::sync::LazyLock;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("Failed to parse anchor selector - this is a bug")
});

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// An anchor element with its raw href and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The href attribute, untouched
    pub href: String,

    /// Concatenated text content of the anchor
    pub text: String,
}

/// Extracts all anchors carrying an href attribute
///
/// # Example
///
/// ```
/// use medpolicy_scraper::crawler::extract_anchors;
///
/// let anchors = extract_anchors(r#"<a href="/a.pdf">A</a><a name="x">skip</a>"#);
/// assert_eq!(anchors.len(), 1);
/// assert_eq!(anchors[0].href, "/a.pdf");
/// ```
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            element.value().attr("href").map(|href| Anchor {
                href: href.to_string(),
                text: element.text().collect::<String>(),
            })
        })
        .collect()
}

/// Extracts the visible text of a page
///
/// Each text node is trimmed, empty nodes are dropped, and the rest are
/// joined with single spaces. Script, style, noscript and template content
/// is skipped.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}
