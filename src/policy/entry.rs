use crate::codes::CodeType;
use crate::policy::Link;
use serde::Serialize;
use std::cmp::Ordering;

/// One billing code found in one policy document
///
/// Field order and renames match the `code_index.csv` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    #[serde(rename = "Policy Title")]
    pub policy_title: String,

    #[serde(rename = "Code Type")]
    pub code_type: CodeType,

    #[serde(rename = "Code")]
    pub code: String,

    #[serde(rename = "Policy URL")]
    pub policy_url: String,

    #[serde(rename = "Source URL")]
    pub source_url: String,
}

impl CodeEntry {
    /// Builds an entry for a code found in the document behind `link`
    pub fn from_link(link: &Link, code_type: CodeType, code: String) -> Self {
        Self {
            policy_title: link.title.clone(),
            code_type,
            code,
            policy_url: link.link.clone(),
            source_url: link.source_url.clone(),
        }
    }

    /// Code index ordering: policy title, then code type, then code
    pub fn index_order(&self, other: &Self) -> Ordering {
        self.policy_title
            .cmp(&other.policy_title)
            .then(self.code_type.cmp(&other.code_type))
            .then_with(|| self.code.cmp(&other.code))
    }
}
