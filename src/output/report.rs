//! Scrape report and user-facing notices

use crate::codes::CodeType;
use crate::policy::{CodeEntry, Link};
use crate::ScrapeError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message meant for the person running the scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Logs the notice at the matching tracing level
    pub fn emit(&self) {
        match self.level {
            NoticeLevel::Error => tracing::error!("{}", self.message),
            NoticeLevel::Warning => tracing::warn!("{}", self.message),
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{}", self.message),
        }
    }
}

/// Result of one scrape run
///
/// `links` keeps discovery order. `codes` accumulates unsorted and is
/// sorted by (policy title, code type, code) in [`ScrapeReport::finish`].
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Seed URLs in input order
    pub seeds: Vec<String>,

    /// Whether PDF extraction was skipped
    pub skip_pdf: bool,

    /// The link table
    pub links: Vec<Link>,

    /// The code index table
    pub codes: Vec<CodeEntry>,

    /// Seeds whose page could not be fetched
    pub failed_seeds: Vec<String>,

    /// Notices raised during the run, in order
    pub notices: Vec<Notice>,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ScrapeReport {
    /// Creates an empty report for the given seeds
    pub fn new(seeds: Vec<String>, skip_pdf: bool) -> Self {
        Self {
            seeds,
            skip_pdf,
            links: Vec::new(),
            codes: Vec::new(),
            failed_seeds: Vec::new(),
            notices: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Records and logs a notice
    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice::new(level, message);
        notice.emit();
        self.notices.push(notice);
    }

    /// Appends links to the link table
    pub fn add_links(&mut self, links: &[Link]) {
        self.links.extend_from_slice(links);
    }

    /// Appends one code entry per code found in the document behind `link`
    pub fn add_codes(&mut self, link: &Link, codes: Vec<(CodeType, String)>) {
        self.codes.extend(
            codes
                .into_iter()
                .map(|(code_type, code)| CodeEntry::from_link(link, code_type, code)),
        );
    }

    /// Records a seed whose page could not be fetched
    pub fn seed_failed(&mut self, seed: &str, error: &ScrapeError) {
        self.failed_seeds.push(seed.to_string());
        self.notify(
            NoticeLevel::Error,
            format!("Error fetching data from {}: {}", seed, error),
        );
    }

    /// Sorts the code index and raises the closing notices
    pub fn finish(&mut self) {
        self.codes.sort_by(CodeEntry::index_order);
        self.finished_at = Some(Utc::now());

        if self.links.is_empty() {
            self.notify(NoticeLevel::Warning, "No policy links found.");
        } else {
            self.notify(
                NoticeLevel::Success,
                format!("Found {} policy link(s).", self.links.len()),
            );
        }

        if self.codes.is_empty() {
            self.notify(NoticeLevel::Warning, "No codes found in the policy documents.");
        } else {
            self.notify(
                NoticeLevel::Success,
                format!(
                    "Found {} code(s) across {} policy document(s).",
                    self.codes.len(),
                    self.policies_with_codes()
                ),
            );
        }
    }

    /// The code index, or `None` when no codes were found
    pub fn code_index(&self) -> Option<&[CodeEntry]> {
        if self.codes.is_empty() {
            None
        } else {
            Some(&self.codes)
        }
    }

    /// Number of distinct policy documents that yielded at least one code
    pub fn policies_with_codes(&self) -> usize {
        self.codes
            .iter()
            .map(|entry| entry.policy_url.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(|n| n.level == NoticeLevel::Error)
    }
}
