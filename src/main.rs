use decoding_chain::app::{App, AppMessage};
use decoding_chain::cli::{parse_args, run_cli_command};
use decoding_chain::config::AppConfig;
use decoding_chain::logging;
use decoding_chain::terminal::{setup_panic_hook, TerminalManager};
use decoding_chain::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env();

    // Handle CLI flags before touching the terminal
    if let Some(result) = run_cli_command(parse_args(std::env::args()), &config) {
        return result.map_err(Into::into);
    }

    // Logging is best effort; the report works without it
    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: {}", e);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut term_manager = TerminalManager::new()?;
        let mut app = App::new(config);

        let result = run_app(term_manager.terminal(), &mut app).await;

        term_manager.restore()?;
        tracing::info!("Decoding the Chain exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when state changed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(app.config.tick_rate);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if !app.handle_key(key) {
                            tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "unbound key");
                        }
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        tracing::debug!(width, height, "terminal resized");
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "input stream error");
                        return Err(e.into());
                    }
                    None => {
                        tracing::warn!("input stream closed");
                        app.quit();
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
