//! Summary Cards
//!
//! One card per entry of the backend service summary. Counts are shown
//! exactly as the backend sent them.

use crate::app::App;
use crate::resource::{service_color, Rgb};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Singular only for exactly one
pub fn summary_label(count: u64) -> &'static str {
    if count == 1 {
        "resource"
    } else {
        "resources"
    }
}

/// Narrowest card that still fits a count and its label
const MIN_CARD_WIDTH: u16 = 14;
/// Card rows before the remainder collapses into a "+N more" card
const MAX_CARD_ROWS: usize = 2;
const CARD_HEIGHT: u16 = 3;

/// Columns per row and rows used for `cards` summary cards at `width`
fn grid(cards: usize, width: u16) -> (usize, usize) {
    if cards == 0 {
        return (0, 0);
    }
    let per_row = usize::from(width / MIN_CARD_WIDTH).max(1);
    let rows = cards.div_ceil(per_row).min(MAX_CARD_ROWS);
    (per_row.min(cards), rows)
}

/// Height of the summary area; zero when there are no cards
pub fn height(cards: usize, width: u16) -> u16 {
    grid(cards, width).1 as u16 * CARD_HEIGHT
}

fn card<'a>(title: &str, body: Line<'a>, [r, g, b]: Rgb) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(r, g, b)))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center)
}

fn count_line(count: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            count.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(summary_label(count), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let total = app.summary.len();
    let (columns, rows) = grid(total, area.width);
    if rows == 0 {
        return;
    }

    let slots = columns * rows;
    // With more entries than slots, the last slot reports the rest
    let shown = if total > slots { slots - 1 } else { total };

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(CARD_HEIGHT)))
        .split(area);
    let cells: Vec<Rect> = row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
                .split(*row)
                .to_vec()
        })
        .collect();

    for ((service_type, count), cell) in app.summary.iter().take(shown).zip(&cells) {
        let color = service_color(Some(service_type));
        f.render_widget(card(service_type, count_line(*count), color), *cell);
    }

    if shown < total {
        let hidden = total - shown;
        let body = Line::from(Span::styled(
            format!("+{} more", hidden),
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(card("...", body, service_color(None)), cells[shown]);
    }
}
