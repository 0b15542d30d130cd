//! Keyboard handling for the gallery.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Poll for events with timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event.
pub enum HandleResult {
    Continue,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcut
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return HandleResult::Quit;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => return HandleResult::Quit,

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        KeyCode::Enter => app.open_preview(),
        KeyCode::Char('f') => app.toggle_favorite(),

        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.status = None;
        }

        // Esc peels back one layer: preview first, then the query.
        KeyCode::Esc => {
            if app.preview.is_some() {
                app.close_preview();
            } else if !app.query.is_empty() {
                app.query.clear();
                app.refresh_rows();
            }
        }

        _ => {}
    }
    HandleResult::Continue
}

fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char(c) => {
            app.query.push(c);
            app.refresh_rows();
        }
        KeyCode::Backspace => {
            app.query.pop();
            app.refresh_rows();
        }
        // Enter keeps the narrowed list, Esc discards it.
        KeyCode::Enter => app.mode = Mode::Normal,
        KeyCode::Esc => {
            app.query.clear();
            app.refresh_rows();
            app.mode = Mode::Normal;
        }
        _ => {}
    }
    HandleResult::Continue
}
