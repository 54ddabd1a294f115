//! Report title block.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
};

use crate::models::dataset::{REPORT_SUBTITLE, REPORT_TITLE};
use crate::ui::layout::LayoutContext;
use crate::ui::text_wrapping::wrap_text;
use crate::ui::theme::{COLOR_HEADER, COLOR_TEXT};

pub fn render_header(ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = ctx.content_width(2) as usize;
    let mut lines = vec![Line::default()];

    for part in wrap_text(REPORT_TITLE, width) {
        lines.push(
            Line::styled(part, Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
        );
    }
    for part in wrap_text(REPORT_SUBTITLE, width) {
        lines.push(Line::styled(part, Style::default().fg(COLOR_TEXT)).alignment(Alignment::Center));
    }
    lines
}
