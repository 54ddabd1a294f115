//! UI rendering for the report
//!
//! The report is one tall page:
//! - Header with title and subtitle
//! - Overview prose
//! - Methodology step list with the selected step's code
//! - Analytics tab bar and the active tab's cards or table
//! - Figures with captions
//! - Retrospective prose and code
//!
//! ## Scrolling
//!
//! Sections produce pre-wrapped lines for the current width, so the page
//! height is known before drawing. [`render`] records that height in the
//! app's [`ScrollState`](crate::view_state::ScrollState), clamps the offset
//! and draws the visible window above a one-line keybind footer.

pub mod components;
mod layout;
pub mod sections;
mod text_wrapping;
mod theme;

pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use text_wrapping::{truncate_to_width, wrap_text};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::App;
use sections::build_document;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the visible part of the report and the footer.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let ctx = LayoutContext::new(body.width, body.height);
    let lines = build_document(app, &ctx);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    app.scroll.update_bounds(height, body.height);

    frame.render_widget(Paragraph::new(lines).scroll((app.scroll.offset, 0)), body);
    frame.render_widget(Paragraph::new(build_keybinds(app, &ctx)), footer);
}

/// Total page height at `width` columns.
pub fn document_height(app: &App, width: u16) -> usize {
    build_document(app, &LayoutContext::new(width, u16::MAX)).len()
}

/// Render the whole page once into plain text, `width` columns wide.
///
/// Trailing spaces are trimmed from every row.
pub fn render_to_string(app: &App, width: u16) -> String {
    let ctx = LayoutContext::new(width, u16::MAX);
    let lines = build_document(app, &ctx);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let area = Rect::new(0, 0, width, height);

    let mut buffer = Buffer::empty(area);
    Paragraph::new(lines).render(area, &mut buffer);

    let mut out = String::new();
    for y in 0..height {
        let row: String = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

// ============================================================================
// Footer
// ============================================================================

/// Keybind hints, shortened on narrow terminals, plus the scroll position.
pub fn build_keybinds(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let key = Style::default().fg(COLOR_ACCENT);
    let dim = Style::default().fg(COLOR_DIM);
    let mut spans = vec![Span::raw(" ")];

    let hints: &[(&str, &str)] = if ctx.is_extra_small() {
        &[("q", "quit"), ("Tab", "tab"), ("[/]", "step"), ("c", "copy")]
    } else if ctx.is_compact() {
        &[
            ("q", "quit"),
            ("Tab", "tab"),
            ("1-4", "step"),
            ("c/C", "copy"),
            ("o/O", "image"),
        ]
    } else {
        &[
            ("q", "quit"),
            ("Tab/←→", "switch tab"),
            ("1-4 [ ]", "select step"),
            ("c/C", "copy code"),
            ("o/O", "open image"),
            ("↑↓ PgUp PgDn", "scroll"),
        ]
    };

    for (i, (k, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", dim));
        }
        spans.push(Span::styled(format!("[{k}]"), key));
        spans.push(Span::raw(format!(" {action}")));
    }

    spans.push(Span::styled(
        format!("  {:>3}%", app.scroll.scroll_percentage()),
        dim,
    ));
    Line::from(spans)
}
