//! Copy label shown in a code block header.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::ui::theme::{COLOR_COPIED_BG, COLOR_COPY_BG};

pub const COPY_TEXT: &str = "Copy";
pub const COPIED_TEXT: &str = "Copied!";

/// Label reflecting the acknowledgement state of one code block.
pub fn copy_label(acknowledged: bool, hotkey: char) -> Vec<Span<'static>> {
    let (text, bg) = if acknowledged {
        (COPIED_TEXT, COLOR_COPIED_BG)
    } else {
        (COPY_TEXT, COLOR_COPY_BG)
    };
    let style = Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    vec![
        Span::styled(format!(" {text} "), style),
        Span::styled(format!(" [{hotkey}]"), Style::default().fg(Color::DarkGray)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_idle_label() {
        assert_eq!(text(&copy_label(false, 'c')), " Copy  [c]");
    }

    #[test]
    fn test_acknowledged_label() {
        let spans = copy_label(true, 'C');
        assert_eq!(text(&spans), " Copied!  [C]");
        assert_eq!(spans[0].style.bg, Some(COLOR_COPIED_BG));
    }
}
