//! Help Overlay
//!
//! Shows keyboard shortcuts.

use super::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/k, ↑/↓", "Move up/down"),
            ("g/G", "Go to top/bottom"),
            ("Ctrl+d/u", "Page down/up"),
            ("Enter", "View resource details"),
        ],
    ),
    (
        "Filtering",
        &[
            ("/", "Search by name, ID or service"),
            ("r", "Select region"),
            ("s", "Select service type"),
            ("c", "Clear all filters"),
        ],
    ),
    (
        "Data",
        &[("R", "Refresh resources (disabled while loading)")],
    ),
    (
        "General",
        &[("?/Esc", "Close help"), ("q, Ctrl+c", "Quit application")],
    ),
];

pub fn render(f: &mut Frame) {
    let popup_area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (title, keys) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            *title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (key, description) in keys.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, popup_area);
}
