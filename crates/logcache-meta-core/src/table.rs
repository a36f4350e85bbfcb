//! Column-aligned text rendering of a report.
//!
//! Cells are padded to the widest cell in their column plus two spaces. The
//! last column is written as-is.

use std::io::Write;

use crate::correlate::ReportRow;
use crate::error::Result;
use crate::meta::format_duration;

const PADDING: usize = 2;

const HEADER: [&str; 5] = ["Source ID", "App Name", "Count", "Expired", "Cache Duration"];

/// Write the banner, header and one line per row to `out`.
///
/// The `Rate` column appears when `with_rate` is set; rows without a sample
/// then show `0`.
pub fn render<W: Write>(out: &mut W, username: &str, rows: &[ReportRow], with_rate: bool) -> Result<()> {
    writeln!(out, "Retrieving log cache metadata as {username}...")?;
    writeln!(out)?;

    let mut header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
    if with_rate {
        header.push("Rate".to_string());
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);
    for row in rows {
        let mut cells = vec![
            row.source_id.clone(),
            row.app_name.clone(),
            row.count.to_string(),
            row.expired.to_string(),
            format_duration(row.cache_duration),
        ];
        if with_rate {
            cells.push(row.rate.unwrap_or(0).to_string());
        }
        lines.push(cells);
    }

    write_aligned(out, &lines)?;
    out.flush()?;
    Ok(())
}

fn write_aligned<W: Write>(out: &mut W, lines: &[Vec<String>]) -> std::io::Result<()> {
    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for cells in lines {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for cells in lines {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                line.push_str(cell);
            } else {
                let width = widths[i] + PADDING;
                line.push_str(&format!("{cell:<width$}"));
            }
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}
