//! Plain-text rendering of an assembled document.
//!
//! A stand-in backend for previews and tests: pads every column to its
//! widest cell line and prints spanning rows across the full width.

use crate::model::{AssembledList, RowDescriptor, RowKind};

/// Render the whole document as readable text.
pub(super) fn render_text(list: &AssembledList) -> String {
    let mut out = String::new();

    out.push_str(&list.masthead.heading);
    if let Some(date_line) = &list.masthead.date_line {
        out.push_str("    ");
        out.push_str(date_line);
        if !list.masthead.location.is_empty() {
            out.push_str(" - ");
            out.push_str(&list.masthead.location);
        }
    }
    out.push('\n');
    for line in [
        &list.masthead.show_title,
        &list.masthead.competition_line,
        &list.masthead.subtitle,
        &list.masthead.information_text,
    ] {
        if !line.is_empty() {
            out.push_str(line);
            out.push('\n');
        }
    }
    if let Some(round) = &list.masthead.round_line {
        out.push_str(round);
        out.push('\n');
    }
    out.push('\n');

    let widths = column_widths(&list.rows);
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    for row in &list.rows {
        for line_index in 0..height(row) {
            if row.style.span_all {
                out.push_str(&format!("{:^total$}", first_line(row)));
            } else {
                let line = row
                    .cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| {
                        let text = cell.lines().nth(line_index).unwrap_or("");
                        format!("{text:<width$}")
                    })
                    .collect::<Vec<_>>()
                    .join("  ");
                out.push_str(line.trim_end());
            }
            if row.style.withdrawn && line_index == 0 {
                out.push_str("  [withdrawn]");
            }
            out.push('\n');
        }
        if row.kind == RowKind::Header {
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }
    }

    if !list.judges.is_empty() {
        out.push('\n');
        out.push_str(&list.judges_heading);
        out.push('\n');
        for judge in &list.judges {
            if judge.task.is_empty() {
                out.push_str(&format!("  {:<10} {}\n", judge.label, judge.name));
            } else {
                out.push_str(&format!(
                    "  {:<10} {}  ({})\n",
                    judge.label, judge.name, judge.task
                ));
            }
        }
    }

    out
}

fn height(row: &RowDescriptor) -> usize {
    if row.style.span_all {
        1
    } else {
        row.cells.iter().map(|c| c.lines().count().max(1)).max().unwrap_or(1)
    }
}

fn first_line(row: &RowDescriptor) -> &str {
    row.cells.first().map_or("", |c| c.lines().next().unwrap_or(""))
}

fn column_widths(rows: &[RowDescriptor]) -> Vec<usize> {
    let columns = rows.first().map_or(0, |r| r.cells.len());
    let mut widths = vec![1; columns];
    for row in rows {
        if row.style.span_all {
            continue;
        }
        for (cell, width) in row.cells.iter().zip(widths.iter_mut()) {
            let widest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            *width = (*width).max(widest);
        }
    }
    widths
}
