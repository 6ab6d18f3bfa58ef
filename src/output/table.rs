//! Plain-text table rendering for the terminal

use crate::output::csv_export::{CODE_COLUMNS, LINK_COLUMNS};
use crate::policy::{CodeEntry, Link};

/// Renders the link table with aligned columns
pub fn render_links_table(links: &[Link]) -> String {
    let rows: Vec<Vec<&str>> = links
        .iter()
        .map(|link| {
            vec![
                link.title.as_str(),
                link.link.as_str(),
                link.source_url.as_str(),
                link.link_type.as_str(),
            ]
        })
        .collect();

    render(&LINK_COLUMNS, &rows)
}

/// Renders the code index with aligned columns
pub fn render_codes_table(codes: &[CodeEntry]) -> String {
    let rows: Vec<Vec<&str>> = codes
        .iter()
        .map(|entry| {
            vec![
                entry.policy_title.as_str(),
                entry.code_type.as_str(),
                entry.code.as_str(),
                entry.policy_url.as_str(),
                entry.source_url.as_str(),
            ]
        })
        .collect();

    render(&CODE_COLUMNS, &rows)
}

fn render(columns: &[&str], rows: &[Vec<&str>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, columns, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(
        &mut out,
        &rule.iter().map(String::as_str).collect::<Vec<_>>(),
        &widths,
    );
    for row in rows {
        push_row(&mut out, row, &widths);
    }

    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}
