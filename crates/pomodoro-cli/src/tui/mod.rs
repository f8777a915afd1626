//! Terminal User Interface for the timer.
//!
//! A passive view over a [`TimerRunner`]: keys map 1:1 to start/pause,
//! reset and notice dismissal, and the screen is redrawn from
//! [`pomodoro_core::TimerView`] on every loop iteration.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pomodoro_core::{TimerEngine, TimerRunner};
use ratatui::prelude::*;

use crate::notify::Notifier;

/// Run the TUI until the user quits.
///
/// Must be called with a tokio runtime entered; the runner spawns its tick
/// task on it.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(engine: TimerEngine, notifier: Notifier) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (runner, events) = TimerRunner::new(engine);
    let mut app = App::new(runner, events, notifier);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.drain_events();
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle(),
                event::Action::Reset => app.reset(),
                event::Action::Dismiss => app.dismiss_notice(),
            }
        }
    }

    Ok(())
}
