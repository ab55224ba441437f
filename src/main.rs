//! IMPOSTOR - pass-the-device party game for the terminal
//!
//! Everyone gets the same secret word, except one player who gets the
//! impostor marker. Find out who it is.

mod app;
mod config;
mod error;
mod game;
mod logging;
mod tui;

use app::App;
use config::Config;
use crossterm::event;
use error::Error;
use std::process::ExitCode;
use std::time::Duration;
use tui::Tui;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("impostor: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    // Logging is best effort; the game runs without it
    if let Err(e) = logging::init(&config) {
        eprintln!("impostor: logging disabled: {}", e);
    }

    let words = config.load_words()?;
    tracing::info!(
        words = words.len(),
        custom = config.words_file.is_some(),
        drag_rows = config.drag_threshold,
        "starting"
    );

    let mut app = App::new(&config, words);

    let mut terminal = Tui::new()?;
    terminal.enter()?;
    let result = event_loop(&mut terminal, &mut app);
    terminal.exit()?;

    tracing::info!("bye");
    result
}

/// Main event loop: draw, wait for input, apply it
fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<(), Error> {
    while !app.should_quit {
        terminal.draw(|frame| tui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            let area = terminal.area()?;
            tui::handle_event(app, event, area);
        }
    }
    Ok(())
}
