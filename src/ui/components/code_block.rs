//! Boxed code view
//!
//! Code is shown verbatim: no trimming, no reflow. Lines wider than the box
//! continue on the next row; tabs are expanded for display only.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::copy_label;
use crate::ui::text_wrapping::{hard_break, line_width, truncate_to_width};
use crate::ui::theme::{COLOR_BORDER, COLOR_CODE, COLOR_CODE_LANG};

const TAB: &str = "    ";

/// Render `code` in a rounded box `width` cells wide.
///
/// The header carries the language tag on the left and the copy label on
/// the right.
pub fn render_code_block(
    code: &str,
    language: &str,
    acknowledged: bool,
    hotkey: char,
    width: usize,
) -> Vec<Line<'static>> {
    let width = width.max(12);
    let inner = width - 4;
    let border = Style::default().fg(COLOR_BORDER);
    let code_style = Style::default().fg(COLOR_CODE);

    let mut lines = Vec::new();
    lines.push(Line::styled(format!("╭{}╮", "─".repeat(width - 2)), border));

    let label = copy_label(acknowledged, hotkey);
    let label_width = line_width(&Line::from(label.clone()));
    let lang_width = inner.saturating_sub(label_width);
    let lang = truncate_to_width(language, lang_width);
    let gap = inner.saturating_sub(lang.width() + label_width);

    let mut header = vec![
        Span::styled("│ ", border),
        Span::styled(lang, Style::default().fg(COLOR_CODE_LANG).add_modifier(Modifier::ITALIC)),
        Span::raw(" ".repeat(gap)),
    ];
    header.extend(label);
    header.push(Span::styled(" │", border));
    lines.push(Line::from(header));
    lines.push(Line::styled(format!("├{}┤", "─".repeat(width - 2)), border));

    for source_line in code.split('\n') {
        let expanded = source_line.replace('\t', TAB);
        let chunks = if expanded.is_empty() {
            vec![String::new()]
        } else {
            hard_break(&expanded, inner)
        };
        for chunk in chunks {
            let fill = inner.saturating_sub(chunk.width());
            lines.push(Line::from(vec![
                Span::styled("│ ", border),
                Span::styled(chunk, code_style),
                Span::raw(" ".repeat(fill)),
                Span::styled(" │", border),
            ]));
        }
    }

    lines.push(Line::styled(format!("╰{}╯", "─".repeat(width - 2)), border));
    lines
}
