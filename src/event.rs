//! Event Handling
//!
//! Keyboard handling for tdisco.

use crate::app::{App, Mode};
use anyhow::Result;
use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use std::time::Duration;

/// What the main loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// Re-fetch services (only requested when no fetch is in flight)
    Refresh,
}

/// Poll for one terminal event and translate it
pub fn handle_events(app: &mut App) -> Result<Outcome> {
    if poll(Duration::from_millis(100))? {
        if let Event::Key(key) = read()? {
            return Ok(handle_key_event(app, key.code, key.modifiers));
        }
    }
    Ok(Outcome::Continue)
}

pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Outcome {
    // Global quit shortcut
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Outcome::Quit;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, code, modifiers),
        Mode::Search => handle_search_mode(app, code, modifiers),
        Mode::RegionSelect | Mode::ServiceSelect => handle_selector_mode(app, code),
        Mode::Describe => handle_describe_mode(app, code),
        Mode::Help => handle_help_mode(app, code),
    }
}

fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Outcome {
    match code {
        KeyCode::Char('q') => return Outcome::Quit,

        // Navigation - vim style + accessible alternatives
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Char('g') | KeyCode::Home => app.go_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.go_to_bottom(),
        KeyCode::PageDown => app.page_down(10),
        KeyCode::PageUp => app.page_up(10),
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => app.page_down(10),
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.page_up(10),

        // Refresh is disabled while a fetch is in flight
        KeyCode::Char('R') => {
            if !app.status.loading {
                return Outcome::Refresh;
            }
        },

        // Filters
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('r') => app.enter_region_select(),
        KeyCode::Char('s') => app.enter_service_select(),
        KeyCode::Char('c') => app.clear_filters(),

        KeyCode::Enter => app.enter_describe_mode(),
        KeyCode::Char('?') => app.enter_help_mode(),

        _ => {},
    }
    Outcome::Continue
}

fn handle_search_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Outcome {
    match code {
        KeyCode::Esc => {
            app.clear_search();
            app.exit_mode();
        },
        KeyCode::Enter => {
            app.exit_mode();
        },
        KeyCode::Backspace => {
            app.pop_search_char();
        },
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c);
        },
        _ => {},
    }
    Outcome::Continue
}

fn handle_selector_mode(app: &mut App, code: KeyCode) -> Outcome {
    match code {
        KeyCode::Esc => app.exit_mode(),
        KeyCode::Enter => app.apply_selector(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Home => app.go_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.go_to_bottom(),
        KeyCode::PageDown => app.page_down(10),
        KeyCode::PageUp => app.page_up(10),
        _ => {},
    }
    Outcome::Continue
}

fn handle_describe_mode(app: &mut App, code: KeyCode) -> Outcome {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Backspace => {
            app.exit_mode();
        },
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_describe_down(1);
        },
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_describe_up(1);
        },
        KeyCode::PageDown => {
            app.scroll_describe_down(10);
        },
        KeyCode::PageUp => {
            app.scroll_describe_up(10);
        },
        KeyCode::Char('g') | KeyCode::Home => {
            app.describe_scroll = 0;
        },
        _ => {},
    }
    Outcome::Continue
}

fn handle_help_mode(app: &mut App, code: KeyCode) -> Outcome {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.exit_mode();
        },
        _ => {},
    }
    Outcome::Continue
}
