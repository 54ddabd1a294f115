//! Plain-text rendering for `--print`.

use std::io::{self, Write};

use crate::app::App;
use crate::config::AppConfig;
use crate::error::ReportResult;
use crate::ui::render_to_string;

/// Render the report at its default state and write it to `out`.
pub fn write_report<W: Write>(out: &mut W, config: &AppConfig, width: Option<u16>) -> ReportResult<()> {
    let width = width.unwrap_or(config.print_width);
    let app = App::new(config.clone());
    tracing::info!(width, "printing report");
    out.write_all(render_to_string(&app, width).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Handle the --print command on stdout.
pub fn handle_print_command(config: &AppConfig, width: Option<u16>) -> ReportResult<()> {
    write_report(&mut io::stdout().lock(), config, width)
}
