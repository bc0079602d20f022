//! Terminal User Interface rendering module
//!
//! Renders the dashboard with ratatui. Rendering is a pure function of
//! [`App`] state: nothing here mutates data or filter state.
//!
//! # Architecture
//!
//! - [`splash`] - Startup progress screen
//! - `header` - Title bar with last-updated timestamp and refresh control
//! - `summary` - One card per backend summary entry
//! - `filters` - Search, region and service filter panel
//! - `table` - Resource table and its empty/loading messages
//! - `selector` - Region and service selector popups
//! - `describe` - JSON detail view of the selected resource
//! - `help` - Help overlay showing keybindings
//!
//! # Layout
//!
//! Top to bottom: header, error banner (only when an error is set),
//! summary cards (only when the summary is non-empty), filter panel,
//! result table, footer.

mod describe;
mod filters;
mod header;
mod help;
mod selector;
pub mod splash;
mod summary;
mod table;

pub use summary::summary_label;
pub use table::{table_body, table_caption, TableBody};

use crate::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let width = f.area().width;
    let error_height = error_banner_height(app.status.error.as_deref(), width);
    let summary_height = summary::height(app.summary.len(), width);
    let filters_height = filters::height(app, width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Length(error_height),   // Error banner
            Constraint::Length(summary_height), // Summary cards
            Constraint::Length(filters_height), // Filter panel
            Constraint::Min(1),                 // Table or describe view
            Constraint::Length(1),              // Footer
        ])
        .split(f.area());

    header::render(f, app, chunks[0]);

    if let Some(error) = &app.status.error {
        render_error_banner(f, error, chunks[1]);
    }

    if !app.summary.is_empty() {
        summary::render(f, app, chunks[2]);
    }

    filters::render(f, app, chunks[3]);

    match app.mode {
        Mode::Describe => describe::render(f, app, chunks[4]),
        _ => table::render(f, app, chunks[4]),
    }

    render_footer(f, app, chunks[5]);

    // Overlays
    match app.mode {
        Mode::RegionSelect | Mode::ServiceSelect => selector::render(f, app, chunks[4]),
        Mode::Help => help::render(f),
        _ => {},
    }
}

/// Most message rows the error banner grows to
const MAX_BANNER_ROWS: u16 = 4;

/// Rows `text` takes when word-wrapped into `width` columns
pub(crate) fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 0usize;

    for line in text.lines() {
        rows += 1;
        let mut used = 0usize;
        for word in line.split(' ') {
            let len = word.chars().count();
            if used == 0 {
                used = len;
            } else if used + 1 + len <= width {
                used += 1 + len;
            } else {
                rows += 1;
                used = len;
            }
            // Words longer than a row are broken across rows
            while used > width {
                rows += 1;
                used -= width;
            }
        }
    }

    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

/// Banner height including borders; zero when there is no error
fn error_banner_height(error: Option<&str>, width: u16) -> u16 {
    match error {
        Some(error) => wrapped_rows(error, width.saturating_sub(2)).clamp(1, MAX_BANNER_ROWS) + 2,
        None => 0,
    }
}

fn render_error_banner(f: &mut Frame, error: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red),
    )))
    .block(block)
    .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.mode {
        Mode::Search => "Type to search | Enter: apply | Esc: clear",
        Mode::RegionSelect | Mode::ServiceSelect => "j/k: move | Enter: select | Esc: cancel",
        Mode::Describe => "j/k: scroll | q/Esc: back",
        Mode::Help => "?/Esc: close help",
        Mode::Normal => "/:search  r:region  s:service  c:clear  R:refresh  Enter:details  ?:help  q:quit",
    };

    let style = if app.status.loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(
        " tdisco ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    if app.status.loading {
        spans.push(Span::styled(" Loading...", style));
    }
    spans.push(Span::styled(format!(" {}", hints), style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Rectangle of the given percentage size centered in `r`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Display text for an optional field; missing values render as `-`
pub(crate) fn field_text(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
