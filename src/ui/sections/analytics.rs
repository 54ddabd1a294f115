//! Analytics: tab bar and the active tab's content.

use ratatui::{style::Style, text::Line};

use super::{section_heading, INDENT};
use crate::app::App;
use crate::models::{
    dataset::{ANALYTICS_INTRO, ANALYTICS_TITLE},
    AnalyticsContent, AnalyticsTab,
};
use crate::ui::components::{render_address_table, render_stat_grid, render_tab_selector, TabItem};
use crate::ui::layout::LayoutContext;
use crate::ui::text_wrapping::wrap_paragraph;
use crate::ui::theme::COLOR_TEXT;

pub fn render_analytics(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = section_heading(ANALYTICS_TITLE, ctx);
    lines.extend(wrap_paragraph(
        ANALYTICS_INTRO,
        INDENT,
        ctx.content_width(INDENT as u16) as usize + INDENT,
        Style::default().fg(COLOR_TEXT),
    ));
    lines.push(Line::default());

    let active = app.view.active_tab();
    let items: Vec<TabItem<'static>> = AnalyticsTab::ALL.into_iter().map(TabItem::from).collect();
    lines.push(render_tab_selector(&items, active.index(), ctx));
    lines.push(Line::default());

    match AnalyticsContent::for_tab(active) {
        AnalyticsContent::Stats(cards) => lines.extend(render_stat_grid(cards, ctx, INDENT)),
        AnalyticsContent::Ranking(rows) => {
            lines.extend(render_address_table(rows, INDENT));
            lines.push(Line::default());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryClipboard, MockImageViewer};
    use crate::config::AppConfig;
    use crate::models::dataset::{GAS_STATS, PRICE_STATS, TRANSACTION_STATS};
    use std::sync::Arc;

    fn app() -> App {
        App::with_adapters(
            AppConfig::default(),
            Arc::new(InMemoryClipboard::new()),
            Arc::new(MockImageViewer::new()),
        )
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_each_tab_shows_only_its_content() {
        let ctx = LayoutContext::new(140, 50);
        let mut app = app();
        let cases = [
            (AnalyticsTab::Transactions, TRANSACTION_STATS[0].title),
            (AnalyticsTab::GasUsage, GAS_STATS[0].title),
            (AnalyticsTab::PriceData, PRICE_STATS[0].title),
        ];
        for (tab, title) in cases {
            app.view.select_tab(tab);
            let rendered = text(&render_analytics(&app, &ctx));
            assert!(rendered.contains(title), "{tab} should show {title}");
            assert!(!rendered.contains("TOTAL VALUE (ETH)"));
        }

        app.view.select_tab(AnalyticsTab::TopAddresses);
        let rendered = text(&render_analytics(&app, &ctx));
        assert!(rendered.contains("0x7a250d...f2488d"));
        assert!(!rendered.contains(GAS_STATS[0].title));
    }
}
