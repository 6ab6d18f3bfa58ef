//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a scrape,
//! including statistics, failed seeds, and the code index grouped by policy.

use crate::codes::CodeType;
use crate::output::report::{NoticeLevel, ScrapeReport};
use crate::output::stats::compute_statistics;
use crate::ScrapeError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary file for a finished scrape
///
/// # Arguments
///
/// * `report` - The finished scrape report
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_summary(
    report: &ScrapeReport,
    output_path: &Path,
) -> Result<(), ScrapeError> {
    let markdown = format_markdown_summary(report);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a scrape report as markdown
pub fn format_markdown_summary(report: &ScrapeReport) -> String {
    let stats = compute_statistics(report);
    let mut md = String::new();

    // Title
    md.push_str("# Medical Policy Code Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    if let Some(finished) = report.finished_at {
        md.push_str(&format!("- **Finished**: {}\n", finished.to_rfc3339()));
        let elapsed = finished - report.started_at;
        md.push_str(&format!(
            "- **Duration**: {:.2} seconds\n",
            elapsed.num_milliseconds() as f64 / 1000.0
        ));
    }
    md.push_str(&format!(
        "- **PDF extraction**: {}\n\n",
        if report.skip_pdf { "skipped" } else { "enabled" }
    ));

    // Seeds
    md.push_str("## Seeds\n\n");
    for seed in &report.seeds {
        let marker = if report.failed_seeds.contains(seed) {
            " (failed)"
        } else {
            ""
        };
        md.push_str(&format!("- {}{}\n", seed, marker));
    }
    md.push('\n');

    // Statistics
    md.push_str("## Statistics\n\n");
    md.push_str("| Measure | Count |\n");
    md.push_str("|---------|-------|\n");
    md.push_str(&format!("| Policy links | {} |\n", stats.total_links));
    for (link_type, count) in &stats.links_by_type {
        md.push_str(&format!("| {} links | {} |\n", link_type, count));
    }
    for code_type in CodeType::ALL {
        let count = stats.codes_by_type.get(&code_type).copied().unwrap_or(0);
        md.push_str(&format!("| {} codes | {} |\n", code_type, count));
    }
    md.push_str(&format!(
        "| Policies with codes | {} |\n\n",
        stats.policies_with_codes
    ));

    // Errors
    let errors: Vec<_> = report
        .notices
        .iter()
        .filter(|n| n.level == NoticeLevel::Error)
        .collect();
    if !errors.is_empty() {
        md.push_str("## Errors\n\n");
        for notice in errors {
            md.push_str(&format!("- {}\n", notice.message));
        }
        md.push('\n');
    }

    // Code index grouped by policy
    md.push_str("## Code Index\n\n");
    match report.code_index() {
        None => md.push_str("No codes found.\n"),
        Some(codes) => {
            let mut current: Option<(&str, &str)> = None;
            for entry in codes {
                let key = (entry.policy_title.as_str(), entry.policy_url.as_str());
                if current != Some(key) {
                    if current.is_some() {
                        md.push('\n');
                    }
                    md.push_str(&format!("### [{}]({})\n\n", key.0, key.1));
                    current = Some(key);
                }
                md.push_str(&format!("- {} `{}`\n", entry.code_type, entry.code));
            }
        }
    }

    md
}
