//! Header Component
//!
//! Displays the backend URL, scan metadata, last-updated timestamp and the
//! refresh control.

use crate::app::App;
use crate::VERSION;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" tdisco v{} ", VERSION),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    // Left: backend and scan info
    let mut left = vec![
        Span::styled(" API: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.client.base_url(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(scanned) = app.regions_scanned {
        left.push(Span::styled(
            format!("  Regions scanned: {}", scanned),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(left)), cols[0]);

    // Right: last updated + refresh control (disabled while loading)
    let mut right = Vec::new();
    if let Some(last_updated) = &app.status.last_updated {
        right.push(Span::styled(
            format!("Last updated: {}  ", last_updated),
            Style::default().fg(Color::DarkGray),
        ));
    }
    right.push(if app.status.loading {
        Span::styled(
            "[R] Refreshing... ",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            "[R] Refresh ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    });
    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        cols[1],
    );
}
