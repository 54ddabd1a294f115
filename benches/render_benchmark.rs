//! Performance benchmarks for page rendering
//!
//! Every key press rebuilds the whole page, so this measures the cost of a
//! redraw at common terminal widths.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decoding_chain::adapters::{InMemoryClipboard, MockImageViewer};
use decoding_chain::app::App;
use decoding_chain::config::AppConfig;
use decoding_chain::input::Command;
use decoding_chain::models::AnalyticsTab;
use decoding_chain::ui::{self, LayoutContext};
use ratatui::{backend::TestBackend, Terminal};

fn bench_app() -> App {
    App::with_adapters(
        AppConfig::default(),
        Arc::new(InMemoryClipboard::new()),
        Arc::new(MockImageViewer::new()),
    )
}

/// Building the document lines alone
fn bench_build_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_document");
    let app = bench_app();

    for width in [60u16, 100, 160] {
        let ctx = LayoutContext::new(width, 40);
        group.bench_with_input(BenchmarkId::from_parameter(width), &ctx, |b, ctx| {
            b.iter(|| black_box(ui::sections::build_document(&app, black_box(ctx))));
        });
    }

    group.finish();
}

/// A full draw into a test terminal, per analytics tab
fn bench_full_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_draw");

    for tab in AnalyticsTab::ALL {
        let mut app = bench_app();
        app.dispatch(Command::SelectTab(tab));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_function(BenchmarkId::from_parameter(tab.short_name()), |b| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, &mut app)).unwrap();
            });
        });
    }

    group.finish();
}

/// Plain-text rendering used by `--print`
fn bench_render_to_string(c: &mut Criterion) {
    let app = bench_app();
    c.bench_function("render_to_string_100", |b| {
        b.iter(|| black_box(ui::render_to_string(&app, black_box(100))));
    });
}

criterion_group!(benches, bench_build_document, bench_full_draw, bench_render_to_string);
criterion_main!(benches);
