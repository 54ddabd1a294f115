//! Stat cards and the card grid.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::models::StatCard;
use crate::ui::layout::LayoutContext;
use crate::ui::text_wrapping::{pad_line, truncate_to_width, wrap_text};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_STAT_VALUE, COLOR_TEXT, COLOR_TOOLTIP};

const CARD_GAP: usize = 2;

/// Render one card as a box `width` cells wide.
pub fn render_stat_card(card: &StatCard, width: usize) -> Vec<Line<'static>> {
    let width = width.max(8);
    let inner = width - 4;
    let border = Style::default().fg(COLOR_BORDER);

    let row = |content: Vec<Span<'static>>| -> Line<'static> {
        let body = pad_line(Line::from(content), inner, Style::default());
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(body.spans);
        spans.push(Span::styled(" │", border));
        Line::from(spans)
    };

    let mut lines = vec![Line::styled(format!("┌{}┐", "─".repeat(width - 2)), border)];

    let marker = if card.tooltip.is_some() { " ⓘ" } else { "" };
    let title = truncate_to_width(card.title, inner.saturating_sub(marker.width()));
    lines.push(row(vec![
        Span::styled(title, Style::default().fg(COLOR_TEXT)),
        Span::styled(marker, Style::default().fg(COLOR_TOOLTIP)),
    ]));

    for part in wrap_text(card.value, inner) {
        lines.push(row(vec![Span::styled(
            part,
            Style::default().fg(COLOR_STAT_VALUE).add_modifier(Modifier::BOLD),
        )]));
    }

    if let Some(description) = card.description {
        for part in wrap_text(description, inner) {
            lines.push(row(vec![Span::styled(part, Style::default().fg(COLOR_TEXT))]));
        }
    }

    if let Some(tooltip) = card.tooltip {
        for part in wrap_text(tooltip, inner) {
            lines.push(row(vec![Span::styled(
                part,
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            )]));
        }
    }

    lines.push(Line::styled(format!("└{}┘", "─".repeat(width - 2)), border));
    lines
}

/// Lay cards out in rows; cards on one row share a height.
pub fn render_stat_grid(cards: &[StatCard], ctx: &LayoutContext, indent: usize) -> Vec<Line<'static>> {
    let per_row = ctx.cards_per_row().max(1);
    let available = (ctx.width as usize).saturating_sub(indent * 2);
    let card_width = (available.saturating_sub(CARD_GAP * (per_row - 1)) / per_row).max(8);
    let border = Style::default().fg(COLOR_BORDER);

    let mut lines = Vec::new();
    for chunk in cards.chunks(per_row) {
        let mut rendered: Vec<Vec<Line<'static>>> = chunk
            .iter()
            .map(|card| render_stat_card(card, card_width))
            .collect();
        let height = rendered.iter().map(Vec::len).max().unwrap_or(0);

        // Stretch shorter cards by repeating an empty body row above the bottom border.
        for card in &mut rendered {
            while card.len() < height {
                let filler = Line::from(vec![
                    Span::styled("│", border),
                    Span::raw(" ".repeat(card_width - 2)),
                    Span::styled("│", border),
                ]);
                let at = card.len() - 1;
                card.insert(at, filler);
            }
        }

        for row in 0..height {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            for (i, card) in rendered.iter_mut().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(CARD_GAP)));
                }
                spans.extend(std::mem::take(&mut card[row].spans));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }
    lines
}
