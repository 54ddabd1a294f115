//! Report sections, top to bottom.
//!
//! Each section turns the app state into pre-wrapped lines for the given
//! page width. [`build_document`] stacks them into the full page.

mod analytics;
mod header;
mod methodology;
mod overview;
mod retrospective;
mod visuals;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER};

pub use analytics::render_analytics;
pub use header::render_header;
pub use methodology::render_methodology;
pub use overview::render_overview;
pub use retrospective::render_retrospective;
pub use visuals::render_visuals;

/// Left and right page margin in columns.
pub(crate) const INDENT: usize = 2;

/// The full page in reading order.
pub fn build_document(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(render_header(ctx));
    lines.extend(render_overview(ctx));
    lines.extend(render_methodology(app, ctx));
    lines.extend(render_analytics(app, ctx));
    lines.extend(render_visuals(app, ctx));
    lines.extend(render_retrospective(app, ctx));
    lines
}

/// Blank line, bold section title and a rule under it.
pub(crate) fn section_heading(title: &str, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = ctx.content_width(INDENT as u16) as usize;
    vec![
        Line::default(),
        Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(
                title.to_string(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled("─".repeat(width), Style::default().fg(COLOR_BORDER)),
        ]),
        Line::default(),
    ]
}
