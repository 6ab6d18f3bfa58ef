//! Statistics for a finished scrape
//!
//! This module summarises a [`ScrapeReport`] into counts and prints them.

use crate::codes::CodeType;
use crate::output::report::ScrapeReport;
use crate::policy::LinkType;
use std::collections::BTreeMap;

/// Scrape statistics summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeStatistics {
    /// Number of seed URLs processed
    pub seeds: u64,

    /// Number of seed pages that could not be fetched
    pub failed_seeds: u64,

    /// Total policy links discovered
    pub total_links: u64,

    /// Count of links by type
    pub links_by_type: BTreeMap<&'static str, u64>,

    /// Total code index rows
    pub total_codes: u64,

    /// Count of code index rows by code type
    pub codes_by_type: BTreeMap<CodeType, u64>,

    /// Distinct policy documents with at least one code
    pub policies_with_codes: u64,

    /// Whether PDF extraction was skipped
    pub skip_pdf: bool,
}

/// Computes statistics from a scrape report
pub fn compute_statistics(report: &ScrapeReport) -> ScrapeStatistics {
    let mut links_by_type = BTreeMap::new();
    for link_type in [LinkType::Pdf, LinkType::Html] {
        let count = report
            .links
            .iter()
            .filter(|link| link.link_type == link_type)
            .count() as u64;
        links_by_type.insert(link_type.as_str(), count);
    }

    let mut codes_by_type = BTreeMap::new();
    for entry in &report.codes {
        *codes_by_type.entry(entry.code_type).or_insert(0) += 1;
    }

    ScrapeStatistics {
        seeds: report.seeds.len() as u64,
        failed_seeds: report.failed_seeds.len() as u64,
        total_links: report.links.len() as u64,
        links_by_type,
        total_codes: report.codes.len() as u64,
        codes_by_type,
        policies_with_codes: report.policies_with_codes() as u64,
        skip_pdf: report.skip_pdf,
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &ScrapeStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Overview:");
    println!("  Seeds processed: {}", stats.seeds);
    println!("  Seeds failed: {}", stats.failed_seeds);
    println!("  Policy links found: {}", stats.total_links);
    if stats.skip_pdf {
        println!("  PDF extraction: skipped");
    }
    println!();

    println!("Links by Type:");
    for (link_type, count) in &stats.links_by_type {
        println!("  {}: {}", link_type, count);
    }
    println!();

    println!("Codes by Type:");
    for code_type in CodeType::ALL {
        let count = stats.codes_by_type.get(&code_type).copied().unwrap_or(0);
        println!("  {}: {}", code_type, count);
    }
    println!();

    println!(
        "Coverage: {} code(s) across {} of {} policy document(s)",
        stats.total_codes, stats.policies_with_codes, stats.total_links
    );
}
