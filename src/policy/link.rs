use serde::Serialize;
use std::fmt;

/// Title used when an anchor has no visible text
pub const UNTITLED: &str = "Untitled";

/// The kind of document a policy link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkType {
    /// A link whose href ends in `.pdf`
    #[serde(rename = "PDF")]
    Pdf,
    /// A policy page served as HTML
    #[serde(rename = "HTML")]
    Html,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Pdf => "PDF",
            LinkType::Html => "HTML",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy link discovered on a seed page
///
/// Field order and renames match the `policy_links.csv` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Anchor text, or [`UNTITLED`]
    #[serde(rename = "Title")]
    pub title: String,

    /// Absolute URL of the policy document
    #[serde(rename = "Link")]
    pub link: String,

    /// The seed page this link was found on
    #[serde(rename = "Source URL")]
    pub source_url: String,

    #[serde(rename = "Type")]
    pub link_type: LinkType,
}

impl Link {
    /// Creates a link, substituting [`UNTITLED`] for blank anchor text
    pub fn new(
        title: &str,
        link: impl Into<String>,
        source_url: impl Into<String>,
        link_type: LinkType,
    ) -> Self {
        let title = title.trim();
        Self {
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title.to_string()
            },
            link: link.into(),
            source_url: source_url.into(),
            link_type,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.link_type == LinkType::Pdf
    }
}
