//! Rendered output: idempotent selection, tab content and the copy label.

mod common;

use common::{buffer_text, render_buffer, TestAppBuilder};
use decoding_chain::input::Command;
use decoding_chain::models::{dataset::TOP_ADDRESSES, AnalyticsTab, SnippetId, StepId};
use decoding_chain::ui::{document_height, render_to_string};

#[test]
fn test_reselecting_tab_renders_identically() {
    let mut fixture = TestAppBuilder::new().build();
    fixture.app.dispatch(Command::SelectTab(AnalyticsTab::GasUsage));
    let first = render_buffer(&mut fixture.app, 120, 40);

    fixture.app.dispatch(Command::SelectTab(AnalyticsTab::GasUsage));
    let second = render_buffer(&mut fixture.app, 120, 40);

    assert_eq!(first, second);
}

#[test]
fn test_reselecting_step_renders_identically() {
    let mut fixture = TestAppBuilder::new().build();
    fixture.app.dispatch(Command::SelectStep(StepId(3)));
    let first = render_to_string(&fixture.app, 140);

    fixture.app.dispatch(Command::SelectStep(StepId(3)));
    assert_eq!(render_to_string(&fixture.app, 140), first);
}

#[test]
fn test_top_addresses_table() {
    let mut fixture = TestAppBuilder::new().build();
    fixture.app.dispatch(Command::SelectTab(AnalyticsTab::TopAddresses));
    let text = render_to_string(&fixture.app, 100);

    let first_row = text
        .lines()
        .find(|l| l.contains("0x7a250d...f2488d"))
        .expect("rank 1 row");
    assert!(first_row.trim_start().starts_with('1'));
    assert!(first_row.contains("9.57"));

    let rows = TOP_ADDRESSES
        .iter()
        .filter(|row| text.contains(&row.short_address()))
        .count();
    assert_eq!(rows, 10);
}

#[test]
fn test_only_active_tab_marked() {
    let mut fixture = TestAppBuilder::new().build();
    fixture.app.dispatch(Command::SelectTab(AnalyticsTab::PriceData));
    let text = render_to_string(&fixture.app, 120);
    assert_eq!(text.matches('▶').count(), 1);
    assert!(text.contains("▶ Price Data"));
}

#[test]
fn test_selected_step_code_rendered() {
    let mut fixture = TestAppBuilder::new().build();
    fixture.app.dispatch(Command::SelectStep(StepId(4)));
    let text = render_to_string(&fixture.app, 100);
    assert!(text.contains("def make_graph(self):"));
    assert!(!text.contains("def stats(self):"));
}

#[tokio::test(start_paused = true)]
async fn test_copy_label_switches_after_copy() {
    let mut fixture = TestAppBuilder::new().build();
    let before = buffer_text(&render_buffer(&mut fixture.app, 140, 200));
    assert!(!before.contains("Copied!"));

    fixture.app.dispatch(Command::Copy(SnippetId::Methodology));
    let after = buffer_text(&render_buffer(&mut fixture.app, 140, 200));
    assert_eq!(after.matches("Copied!").count(), 1);
}

#[test]
fn test_scrolling_moves_viewport() {
    let mut fixture = TestAppBuilder::new().build();
    let top = render_buffer(&mut fixture.app, 100, 30);
    assert!(buffer_text(&top).contains("Decoding the Chain"));

    fixture.app.dispatch(Command::ScrollToBottom);
    let bottom = render_buffer(&mut fixture.app, 100, 30);

    assert_ne!(top, bottom);
    assert!(fixture.app.scroll.is_at_bottom());
    let expected = document_height(&fixture.app, 100) - 29;
    assert_eq!(fixture.app.scroll.offset as usize, expected);
}
