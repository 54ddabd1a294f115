//! Tab Selector Component
//!
//! A horizontal tab selector. Uses `▶` marker for the selected item with
//! responsive label sizing.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::AnalyticsTab;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
    /// Key that selects the tab directly
    pub hotkey: Option<char>,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
            hotkey: None,
        }
    }

    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self {
            label,
            short_label,
            hotkey: None,
        }
    }

    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }
}

impl From<AnalyticsTab> for TabItem<'static> {
    fn from(tab: AnalyticsTab) -> Self {
        let hotkey = match tab {
            AnalyticsTab::Transactions => 't',
            AnalyticsTab::TopAddresses => 'a',
            AnalyticsTab::GasUsage => 'g',
            AnalyticsTab::PriceData => 'p',
        };
        TabItem::with_short_label(tab.name(), tab.short_name()).with_hotkey(hotkey)
    }
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the currently selected tab
/// * `ctx` - Layout context for responsive sizing
///
/// # Example
/// ```ignore
/// let items: Vec<TabItem> = AnalyticsTab::ALL.into_iter().map(TabItem::from).collect();
/// let line = render_tab_selector(&items, 0, &ctx);
/// ```
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            let dim = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", dim));
            spans.push(Span::styled(label.to_string(), dim));
        }

        if let Some(key) = item.hotkey.filter(|_| !ctx.is_extra_small()) {
            spans.push(Span::styled(format!(" [{key}]"), Style::default().fg(COLOR_DIM)));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
