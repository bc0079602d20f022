//! Resource Detail View
//!
//! Pretty-printed JSON of the selected resource, including fields the
//! table does not show (tags, launch times, ...).

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let json = app
        .selected_resource_json()
        .unwrap_or_else(|| "No resource selected".to_string());

    let lines: Vec<Line> = json.lines().map(highlight_json_line).collect();
    let total_lines = lines.len();

    let title = match app.selected_resource().and_then(|r| r.name.as_deref()) {
        Some(name) => format!(" {} ", name),
        None => " Details ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let visible_lines = inner_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.describe_scroll.min(max_scroll);

    f.render_widget(
        Paragraph::new(lines).scroll((scroll as u16, 0)),
        inner_area,
    );

    if total_lines > visible_lines {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(max_scroll + visible_lines).position(scroll);
        f.render_stateful_widget(scrollbar, inner_area, &mut scrollbar_state);
    }
}

/// Byte length of the leading JSON string literal in `s` (quotes included)
fn string_literal_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    if chars.next()?.1 != '"' {
        return None;
    }
    let mut escaped = false;
    for (idx, c) in chars {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(idx + 1),
            _ => {},
        }
    }
    None
}

fn value_style(value: &str) -> Style {
    match value {
        "null" => Style::default().fg(Color::DarkGray),
        "true" | "false" => Style::default().fg(Color::Magenta),
        "{" | "}" | "[" | "]" | "{}" | "[]" => Style::default().fg(Color::Yellow),
        v if v.starts_with('"') => Style::default().fg(Color::Green),
        v if v.parse::<f64>().is_ok() => Style::default().fg(Color::LightBlue),
        _ => Style::default().fg(Color::White),
    }
}

/// Highlight one line of `serde_json::to_string_pretty` output
fn highlight_json_line(line: &str) -> Line<'static> {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let mut spans = vec![Span::raw(indent.to_string())];

    let mut rest = body;
    if let Some(len) = string_literal_len(rest) {
        if rest[len..].starts_with(": ") {
            spans.push(Span::styled(
                rest[..len].to_string(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(": ", Style::default().fg(Color::White)));
            rest = &rest[len + 2..];
        }
    }

    let (value, comma) = match rest.strip_suffix(',') {
        Some(value) => (value, true),
        None => (rest, false),
    };
    if !value.is_empty() {
        spans.push(Span::styled(value.to_string(), value_style(value)));
    }
    if comma {
        spans.push(Span::styled(",", Style::default().fg(Color::White)));
    }

    Line::from(spans)
}
