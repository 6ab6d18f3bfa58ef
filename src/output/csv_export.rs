//! CSV export of the link table and code index
//!
//! Values are comma separated, every file starts with a header row, and
//! fields containing delimiters, quotes or newlines are double-quoted with
//! embedded quotes doubled. Header rows are written even for empty tables.

use crate::config::OutputConfig;
use crate::output::report::ScrapeReport;
use crate::policy::{CodeEntry, Link};
use crate::ScrapeError;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Columns of `policy_links.csv`
pub const LINK_COLUMNS: [&str; 4] = ["Title", "Link", "Source URL", "Type"];

/// Columns of `code_index.csv`
pub const CODE_COLUMNS: [&str; 5] = [
    "Policy Title",
    "Code Type",
    "Code",
    "Policy URL",
    "Source URL",
];

/// Files written by [`export_tables`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub links_path: PathBuf,

    /// `None` when there were no codes to export
    pub codes_path: Option<PathBuf>,
}

/// Writes the link table as CSV
pub fn write_links_csv<W: Write>(links: &[Link], writer: W) -> Result<(), ScrapeError> {
    write_table(&LINK_COLUMNS, links, writer)
}

/// Writes the code index as CSV
pub fn write_codes_csv<W: Write>(codes: &[CodeEntry], writer: W) -> Result<(), ScrapeError> {
    write_table(&CODE_COLUMNS, codes, writer)
}

/// Renders the link table as a CSV string
pub fn links_to_csv(links: &[Link]) -> Result<String, ScrapeError> {
    let mut buffer = Vec::new();
    write_links_csv(links, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Renders the code index as a CSV string
pub fn codes_to_csv(codes: &[CodeEntry]) -> Result<String, ScrapeError> {
    let mut buffer = Vec::new();
    write_codes_csv(codes, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes both tables of a finished report into the output directory
///
/// The code index file is only written when codes were found.
pub fn export_tables(
    report: &ScrapeReport,
    output: &OutputConfig,
) -> Result<ExportedFiles, ScrapeError> {
    fs::create_dir_all(&output.directory)?;

    let links_path = output.links_path();
    write_links_csv(&report.links, File::create(&links_path)?)?;
    tracing::info!("Wrote {} link(s) to {}", report.links.len(), links_path.display());

    let codes_path = match report.code_index() {
        Some(codes) => {
            let path = output.codes_path();
            write_codes_csv(codes, File::create(&path)?)?;
            tracing::info!("Wrote {} code(s) to {}", codes.len(), path.display());
            Some(path)
        }
        None => None,
    };

    Ok(ExportedFiles {
        links_path,
        codes_path,
    })
}

fn write_table<W: Write, R: Serialize>(
    columns: &[&str],
    rows: &[R],
    writer: W,
) -> Result<(), ScrapeError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(columns)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}
