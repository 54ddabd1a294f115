//! Figures: image placeholders with alt text, source and caption.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{section_heading, INDENT};
use crate::app::{App, FigureState};
use crate::models::{dataset::VISUALS_TITLE, FigureId};
use crate::ui::layout::LayoutContext;
use crate::ui::text_wrapping::{pad_line, wrap_text};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FALLBACK, COLOR_TEXT};

pub fn render_visuals(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = section_heading(VISUALS_TITLE, ctx);
    let width = ctx.content_width(INDENT as u16) as usize;

    for (i, state) in app.figures.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(render_figure(state, width));
    }
    lines
}

fn hotkey(id: FigureId) -> char {
    match id {
        FigureId::NetworkGraph => 'o',
        FigureId::PriceChart => 'O',
    }
}

fn render_figure(state: &FigureState, width: usize) -> Vec<Line<'static>> {
    let width = width.max(12);
    let inner = width - 4;
    let border = Style::default().fg(COLOR_BORDER);
    let pad = " ".repeat(INDENT);
    let figure = state.definition();

    let boxed = |content: Line<'static>| -> Line<'static> {
        let body = pad_line(content, inner, Style::default());
        let mut spans = vec![Span::raw(pad.clone()), Span::styled("│ ", border)];
        spans.extend(body.spans);
        spans.push(Span::styled(" │", border));
        Line::from(spans)
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(format!("┌{}┐", "─".repeat(width - 2)), border),
    ])];

    for part in wrap_text(&format!("▣ {}", figure.alt), inner) {
        lines.push(boxed(Line::styled(part, Style::default().fg(COLOR_TEXT))));
    }
    lines.push(boxed(Line::default()));
    for part in wrap_text(state.src(), inner) {
        lines.push(boxed(Line::styled(part, Style::default().fg(COLOR_DIM))));
    }
    if state.fallback_applied() {
        lines.push(boxed(Line::styled(
            "image failed to load, showing placeholder",
            Style::default().fg(COLOR_FALLBACK),
        )));
    }
    lines.push(boxed(Line::styled(
        format!("[{}] open image", hotkey(state.id)),
        Style::default().fg(COLOR_DIM),
    )));

    lines.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(format!("└{}┘", "─".repeat(width - 2)), border),
    ]));

    for part in wrap_text(figure.caption, width) {
        lines.push(
            Line::styled(
                part,
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center),
        );
    }
    lines
}
