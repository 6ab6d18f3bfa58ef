//! Billing code matching
//!
//! This module recognises the three code families that appear in medical
//! policy documents and pulls the distinct codes out of free text:
//! - CPT: five digits (`99213`)
//! - HCPCS: one uppercase letter and four digits (`J3490`)
//! - PLA: four digits followed by `U` (`0037U`)

mod matcher;

pub use matcher::extract_codes;

use serde::Serialize;
use std::fmt;

/// The family a billing code belongs to
///
/// Variant order is the sort order used by the code index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CodeType {
    /// Current Procedural Terminology
    #[serde(rename = "CPT")]
    Cpt,
    /// Healthcare Common Procedure Coding System
    #[serde(rename = "HCPCS")]
    Hcpcs,
    /// Proprietary Laboratory Analyses
    #[serde(rename = "PLA")]
    Pla,
}

impl CodeType {
    /// All code types in matching order
    pub const ALL: [CodeType; 3] = [CodeType::Cpt, CodeType::Hcpcs, CodeType::Pla];

    /// Returns the label used in exported tables
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeType::Cpt => "CPT",
            CodeType::Hcpcs => "HCPCS",
            CodeType::Pla => "PLA",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
