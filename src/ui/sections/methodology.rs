//! Methodology: step list and the selected step's code.
//!
//! On wide pages the list and the code view sit side by side; otherwise the
//! code view follows the list. When the selected id matches no step the code
//! view is left out.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{section_heading, INDENT};
use crate::app::App;
use crate::models::{
    dataset::{CODE_LANGUAGE, METHODOLOGY_INTRO, METHODOLOGY_STEPS, METHODOLOGY_TITLE},
    MethodologyStep, SnippetId, StepId,
};
use crate::ui::components::render_code_block;
use crate::ui::layout::LayoutContext;
use crate::ui::text_wrapping::{pad_line, wrap_paragraph, wrap_text};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG, COLOR_TEXT};

pub fn render_methodology(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = section_heading(METHODOLOGY_TITLE, ctx);
    let content_width = ctx.content_width(INDENT as u16) as usize;
    lines.extend(wrap_paragraph(
        METHODOLOGY_INTRO,
        INDENT,
        content_width + INDENT,
        Style::default().fg(COLOR_TEXT),
    ));
    lines.push(Line::default());

    let selected = app.view.selected_step();
    let acknowledged = app.copy_acknowledged(SnippetId::Methodology);
    let inner = LayoutContext::new(content_width as u16, ctx.height);
    if app.displayed_code().is_none() {
        tracing::debug!(step = selected.0, "selected step has no code sample");
    }

    if inner.should_stack_panels() {
        lines.extend(indent_all(step_list(selected, content_width), INDENT));
        if let Some(code) = app.displayed_code() {
            lines.push(Line::default());
            lines.extend(indent_all(
                render_code_block(code, CODE_LANGUAGE, acknowledged, 'c', content_width),
                INDENT,
            ));
        }
        return lines;
    }

    let (left_width, gap, right_width) = inner.two_column_widths();
    let left = step_list(selected, left_width as usize);
    let right = app
        .displayed_code()
        .map(|code| render_code_block(code, CODE_LANGUAGE, acknowledged, 'c', right_width as usize))
        .unwrap_or_default();

    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    for _ in 0..rows {
        let l = pad_line(left.next().unwrap_or_default(), left_width as usize, Style::default());
        let mut spans = vec![Span::raw(" ".repeat(INDENT))];
        spans.extend(l.spans);
        spans.push(Span::raw(" ".repeat(gap as usize)));
        if let Some(r) = right.next() {
            spans.extend(r.spans);
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// The ordered step list with the selected entry emphasised.
fn step_list(selected: StepId, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, step) in METHODOLOGY_STEPS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(step_entry(step, step.id == selected, width));
    }
    lines
}

fn step_entry(step: &MethodologyStep, is_selected: bool, width: usize) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(2).max(1);
    let (bar, bar_style, bg) = if is_selected {
        ("▌ ", Style::default().fg(COLOR_ACCENT), Style::default().bg(COLOR_SELECTED_BG))
    } else {
        ("  ", Style::default(), Style::default())
    };

    let title_style = if is_selected {
        bg.fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
    };
    let body_style = if is_selected {
        bg.fg(COLOR_TEXT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let heading = step.heading();
    let mut lines = Vec::new();
    for part in wrap_text(&heading, text_width) {
        lines.push(entry_line(bar, bar_style, part, title_style, text_width, bg));
    }
    for part in wrap_text(step.description, text_width) {
        lines.push(entry_line(bar, bar_style, part, body_style, text_width, bg));
    }
    lines
}

fn entry_line(
    bar: &'static str,
    bar_style: Style,
    text: String,
    style: Style,
    width: usize,
    bg: Style,
) -> Line<'static> {
    let body = pad_line(Line::from(Span::styled(text, style)), width, bg);
    let mut spans = vec![Span::styled(bar, bar_style.patch(bg))];
    spans.extend(body.spans);
    Line::from(spans)
}

fn indent_all(lines: Vec<Line<'static>>, indent: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}
