//! Project overview prose.

use ratatui::{style::Style, text::Line};

use super::{section_heading, INDENT};
use crate::models::dataset::{OVERVIEW, OVERVIEW_TITLE};
use crate::ui::layout::LayoutContext;
use crate::ui::text_wrapping::wrap_paragraph;
use crate::ui::theme::COLOR_TEXT;

pub fn render_overview(ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = section_heading(OVERVIEW_TITLE, ctx);
    lines.extend(wrap_paragraph(
        OVERVIEW,
        INDENT,
        ctx.content_width(INDENT as u16) as usize + INDENT,
        Style::default().fg(COLOR_TEXT),
    ));
    lines
}
