//! Ranked address table.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::AddressRankingRow;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

const HEADERS: [&str; 4] = ["RANK", "ADDRESS", "TRANSACTIONS", "TOTAL VALUE (ETH)"];

/// Render the ranking as a header row, a rule and one line per row.
///
/// Addresses are shortened and values shown with two decimals.
pub fn render_address_table(rows: &[AddressRankingRow], indent: usize) -> Vec<Line<'static>> {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.rank.to_string(),
                row.short_address(),
                row.transactions.to_string(),
                row.formatted_value(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let pad = " ".repeat(indent);
    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header_style = Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD);
    let mut header = vec![Span::raw(pad.clone())];
    for (i, title) in HEADERS.iter().enumerate() {
        header.push(Span::styled(format!("{:<w$}", title, w = widths[i]), header_style));
        if i + 1 < HEADERS.len() {
            header.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(header));

    let total: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    lines.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled("─".repeat(total), Style::default().fg(COLOR_BORDER)),
    ]));

    for row in &cells {
        let styles = [
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            Style::default().fg(COLOR_TEXT),
            Style::default().fg(COLOR_TEXT),
            Style::default().fg(COLOR_TEXT),
        ];
        let mut spans = vec![Span::raw(pad.clone())];
        for (i, cell) in row.iter().enumerate() {
            spans.push(Span::styled(format!("{:<w$}", cell, w = widths[i]), styles[i]));
            if i + 1 < row.len() {
                spans.push(Span::raw("   "));
            }
        }
        lines.push(Line::from(spans));
    }

    lines
}
