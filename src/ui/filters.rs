//! Filter Panel
//!
//! Shows the search term, region and service selections, and the clear hint.

use super::wrapped_rows;
use crate::app::{App, Mode};
use crate::resource::ALL;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SEARCH_PLACEHOLDER: &str = "Search by name or ID...";

/// Selector value as shown to the user; the sentinel reads as "All ..."
pub fn selection_text<'a>(value: &'a str, all_label: &'a str) -> &'a str {
    if value == ALL {
        all_label
    } else {
        value
    }
}

/// Most rows the filter line wraps onto
const MAX_FILTER_ROWS: u16 = 2;

/// Panel height including borders, wrapping the line on narrow terminals
pub fn height(app: &App, width: u16) -> u16 {
    let text: String = filter_line(app)
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect();
    wrapped_rows(&text, width.saturating_sub(2)).clamp(1, MAX_FILTER_ROWS) + 2
}

fn filter_line(app: &App) -> Line<'_> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let search_span = if app.mode == Mode::Search {
        Span::styled(format!("{}_", app.filter.search_term), active)
    } else if app.filter.search_term.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, label)
    } else {
        Span::styled(app.filter.search_term.clone(), value)
    };

    let region_style = if app.mode == Mode::RegionSelect {
        active
    } else {
        value
    };
    let service_style = if app.mode == Mode::ServiceSelect {
        active
    } else {
        value
    };

    Line::from(vec![
        Span::styled(" Search: ", label),
        search_span,
        Span::styled("   Region: ", label),
        Span::styled(
            selection_text(&app.filter.selected_region, "All Regions"),
            region_style,
        ),
        Span::styled("   Service: ", label),
        Span::styled(
            selection_text(&app.filter.selected_service, "All Services"),
            service_style,
        ),
        Span::styled("   [c] Clear filters", label),
    ])
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Filters ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(
        Paragraph::new(filter_line(app))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
