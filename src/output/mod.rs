//! Output module for scrape results
//!
//! This module handles:
//! - The scrape report with its two tables and user-facing notices
//! - CSV export of the link table and the code index
//! - Plain-text table rendering for the terminal
//! - Statistics and an optional markdown summary

mod csv_export;
mod markdown;
mod report;
pub mod stats;
mod table;

pub use csv_export::{
    codes_to_csv, export_tables, links_to_csv, write_codes_csv, write_links_csv, ExportedFiles,
    CODE_COLUMNS, LINK_COLUMNS,
};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use report::{Notice, NoticeLevel, ScrapeReport};
pub use stats::{compute_statistics, print_statistics, ScrapeStatistics};
pub use table::{render_codes_table, render_links_table};
