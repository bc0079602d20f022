//! Region and Service Selectors
//!
//! Popup lists for choosing the region or service filter.

use super::centered_rect;
use super::filters::selection_text;
use crate::app::{App, Mode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let (title, all_label, options, current) = match app.mode {
        Mode::RegionSelect => (
            " Select Region ",
            "All Regions",
            app.region_options(),
            &app.filter.selected_region,
        ),
        Mode::ServiceSelect => (
            " Select Service ",
            "All Services",
            app.service_options(),
            &app.filter.selected_service,
        ),
        _ => return,
    };

    let popup_area = centered_rect(40, 80, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| {
            let style = if option == current {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Span::styled(
                format!("  {}", selection_text(option, all_label)),
                style,
            ))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.selector_selected));

    f.render_stateful_widget(list, inner, &mut state);
}
