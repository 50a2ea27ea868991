//! `Tastebud` - food discovery and dining journal for the terminal
//!
//! Entry point for the application.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tastebud::app::App;
use tastebud::cli::Args;
use tastebud::fs::TastebudPaths;
use tastebud::logging;
use tastebud::tui::TerminalEventGuard;

fn main() -> Result<()> {
    let args = Args::parse();

    let paths = match &args.dir {
        Some(dir) => TastebudPaths::new(dir),
        None => TastebudPaths::from_cwd()?,
    };

    // Without a log file the app still runs.
    if let Err(e) = logging::init(&paths.log_file(), &args.log_level) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    let result = run_app(&mut terminal, paths, &args);

    // Restore the terminal
    ratatui::restore();

    result
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    paths: TastebudPaths,
    args: &Args,
) -> Result<()> {
    // Must be created after `ratatui::init`, which can reset terminal flags.
    let _event_guard = TerminalEventGuard::new();

    let mut app = App::new(paths, args.tab);
    info!(tab = app.tab().name(), "tastebud started");

    loop {
        // Layout is calculated inside the draw closure so it matches the
        // area being rendered.
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                // Bracketed paste arrives as one event
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    if let Err(e) = app.save_settings_on_exit() {
        warn!(error = %e, "failed to save settings on exit");
        eprintln!("Warning: Failed to save settings on exit: {e:#}");
    }
    info!("tastebud stopped");

    Ok(())
}
