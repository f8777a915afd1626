//! Key handling for the TUI.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::tui::app::App;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Start or pause the countdown.
    Toggle,
    Reset,
    /// Close the completion notice.
    Dismiss,
}

/// Poll the terminal for a key press.
///
/// Returns an action to take, or None if no action is needed. The short poll
/// timeout keeps the display within a fraction of a second of the engine.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &App) -> io::Result<Option<Action>> {
    if !event::poll(Duration::from_millis(100))? {
        return Ok(None);
    }
    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }
    Ok(map_key(key.code, key.modifiers, app.notice.is_some()))
}

fn map_key(code: KeyCode, modifiers: KeyModifiers, notice_open: bool) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // The notice is modal: only dismissal and quitting get through.
    if notice_open {
        return match code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::Dismiss),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Char('s') => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        _ => None,
    }
}
