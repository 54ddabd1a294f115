//! Text wrapping utilities for prose and code rendering
//!
//! The page is rendered as pre-wrapped lines so its height is known before
//! drawing. Widths are measured in terminal cells with `unicode-width`.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` to `max_width` cells.
///
/// Runs of whitespace collapse to one space. Words longer than a line are
/// broken at the cell boundary. Empty input yields a single empty line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let space = usize::from(current_width > 0);

        if current_width + space + word_width <= max_width {
            if space == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for chunk in hard_break(word, max_width) {
                current_width = chunk.width();
                if current_width == max_width {
                    lines.push(chunk);
                    current_width = 0;
                } else {
                    current = chunk;
                }
            }
        }
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `text` into chunks of at most `max_width` cells, keeping every character.
pub fn hard_break(word: &str, max_width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            width = 0;
        }
        chunk.push(ch);
        width += ch_width;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Wrap prose into styled lines with a left indent.
pub fn wrap_paragraph(text: &str, indent: usize, max_width: usize, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap_text(text, max_width.saturating_sub(indent))
        .into_iter()
        .map(|line| Line::from(vec![Span::raw(pad.clone()), Span::styled(line, style)]))
        .collect()
}

/// Cut `text` to at most `max_width` cells without splitting a character.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out
}

/// Total cell width of a styled line.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|span| span.content.width()).sum()
}

/// Pad a styled line with spaces up to `width` cells.
pub fn pad_line(mut line: Line<'static>, width: usize, style: Style) -> Line<'static> {
    let current = line_width(&line);
    if current < width {
        line.spans.push(Span::styled(" ".repeat(width - current), style));
    }
    line
}
