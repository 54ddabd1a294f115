//! Retrospective prose around the API parameter snippet.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{section_heading, INDENT};
use crate::app::App;
use crate::models::{
    dataset::{
        CHALLENGES_CODE, CODE_LANGUAGE, RETROSPECTIVE_AFTER, RETROSPECTIVE_BEFORE,
        RETROSPECTIVE_TITLE,
    },
    SnippetId,
};
use crate::ui::components::render_code_block;
use crate::ui::layout::LayoutContext;
use crate::ui::text_wrapping::wrap_paragraph;
use crate::ui::theme::COLOR_TEXT;

pub fn render_retrospective(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = section_heading(RETROSPECTIVE_TITLE, ctx);
    let width = ctx.content_width(INDENT as u16) as usize;
    let style = Style::default().fg(COLOR_TEXT);

    for paragraph in RETROSPECTIVE_BEFORE {
        lines.extend(wrap_paragraph(paragraph, INDENT, width + INDENT, style));
        lines.push(Line::default());
    }

    let acknowledged = app.copy_acknowledged(SnippetId::Retrospective);
    for line in render_code_block(CHALLENGES_CODE, CODE_LANGUAGE, acknowledged, 'C', width) {
        let mut spans = vec![Span::raw(" ".repeat(INDENT))];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());

    for paragraph in RETROSPECTIVE_AFTER {
        lines.extend(wrap_paragraph(paragraph, INDENT, width + INDENT, style));
        lines.push(Line::default());
    }
    lines
}
