//! Resource Table
//!
//! One row per filtered resource, or a message when there is nothing to show.

use super::field_text;
use crate::app::App;
use crate::resource::{service_color, Resource, Rgb, StatusBucket};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const HEADERS: [&str; 7] = ["Service", "Resource", "Name/ID", "Region", "AZ", "Status", "Details"];
const WIDTHS: [u16; 7] = [10, 12, 22, 12, 12, 10, 22];

/// What the table body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    NoResources,
    NoMatches,
    Rows,
}

impl TableBody {
    pub fn message(self) -> Option<&'static str> {
        match self {
            TableBody::Loading => Some("Scanning resources..."),
            TableBody::NoResources => Some("No resources found"),
            TableBody::NoMatches => Some("No resources match your filters"),
            TableBody::Rows => None,
        }
    }
}

pub fn table_body(app: &App) -> TableBody {
    if app.status.loading {
        TableBody::Loading
    } else if app.resources.is_empty() {
        TableBody::NoResources
    } else if app.filtered.is_empty() {
        TableBody::NoMatches
    } else {
        TableBody::Rows
    }
}

/// Caption under the table: "Showing all T resources" or "Showing F of T resources"
pub fn table_caption(filtered: usize, total: usize) -> String {
    if filtered == total {
        format!("Showing all {} resources", total)
    } else {
        format!("Showing {} of {} resources", filtered, total)
    }
}

fn badge(text: &str, [r, g, b]: Rgb) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(Color::White).bg(Color::Rgb(r, g, b)),
    )
}

fn name_cell(resource: &Resource) -> Text<'static> {
    let mut lines = vec![Line::from(Span::styled(
        field_text(resource.name.as_deref()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(id) = resource.secondary_id() {
        lines.push(Line::from(Span::styled(
            id.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    Text::from(lines)
}

/// One line per present service-specific attribute
pub fn detail_lines(resource: &Resource) -> Vec<String> {
    resource
        .detail_attributes()
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect()
}

fn resource_row(resource: &Resource) -> Row<'static> {
    let name = name_cell(resource);
    let details = detail_lines(resource);
    let height = name.lines.len().max(details.len()).max(1) as u16;

    let service = resource.service_type.as_deref();
    let state = resource.state.as_deref();

    Row::new(vec![
        Cell::from(Line::from(badge(
            &field_text(service),
            service_color(service),
        ))),
        Cell::from(field_text(resource.resource_type.as_deref())),
        Cell::from(name),
        Cell::from(Span::styled(
            field_text(resource.region.as_deref()),
            Style::default().fg(Color::Cyan),
        )),
        Cell::from(field_text(resource.availability_zone.as_deref())),
        Cell::from(Line::from(badge(
            &field_text(state),
            StatusBucket::from_state(state).color(),
        ))),
        Cell::from(Text::from(
            details.into_iter().map(Line::from).collect::<Vec<_>>(),
        )),
    ])
    .height(height)
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered.len();
    let total = app.resources.len();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" Resources ({}) ", filtered),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", table_caption(filtered, total)),
            Style::default().fg(Color::DarkGray),
        )));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let body = table_body(app);
    if let Some(message) = body.message() {
        let style = if body == TableBody::Loading {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(message, style)))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, inner_area);
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows: Vec<Row> = app
        .filtered_resources()
        .into_iter()
        .map(resource_row)
        .collect();

    let widths = WIDTHS.iter().map(|w| Constraint::Percentage(*w));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    state.select(Some(app.selected));

    f.render_stateful_widget(table, inner_area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::DiscoveryClient;
    use crate::app::ServicesFetched;
    use crate::resource::ServicesResponse;
    use crate::ui::test_support::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with(resources: Vec<Resource>) -> App {
        let client = DiscoveryClient::new("http://127.0.0.1:9/api").unwrap();
        let mut app = App::new(client);
        let seq = app.begin_services_fetch();
        app.apply_services(ServicesFetched {
            seq,
            result: Ok(ServicesResponse {
                resources: Some(resources),
                ..ServicesResponse::default()
            }),
        });
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 12)).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn test_body_states() {
        let mut app = app_with(Vec::new());
        assert_eq!(table_body(&app), TableBody::NoResources);

        let mut app_rows = app_with(vec![Resource::new("web1", "i-1", "EC2", "us-east-1")]);
        assert_eq!(table_body(&app_rows), TableBody::Rows);

        app_rows.push_search_char('z');
        assert_eq!(table_body(&app_rows), TableBody::NoMatches);

        app.begin_services_fetch();
        assert_eq!(table_body(&app), TableBody::Loading);
    }

    #[test]
    fn test_caption() {
        assert_eq!(table_caption(4, 4), "Showing all 4 resources");
        assert_eq!(table_caption(1, 4), "Showing 1 of 4 resources");
        assert_eq!(table_caption(0, 0), "Showing all 0 resources");
    }

    #[test]
    fn test_detail_lines() {
        let mut resource = Resource::new("fn", "fn", "Lambda", "us-east-1");
        resource.runtime = Some("python3.12".to_string());
        resource.cidr_block = Some("10.0.0.0/16".to_string());
        assert_eq!(
            detail_lines(&resource),
            vec!["Runtime: python3.12", "CIDR: 10.0.0.0/16"]
        );
    }

    #[test]
    fn test_renders_rows_and_secondary_id() {
        let app = app_with(vec![
            Resource::new("web1", "i-0abc", "EC2", "us-east-1").with_state("running"),
            Resource::new("assets", "assets", "S3", "us-east-1"),
        ]);
        let screen = draw(&app);

        assert!(screen.contains("Resources (2)"));
        assert!(screen.contains("Showing all 2 resources"));
        assert!(screen.contains("web1"));
        assert!(screen.contains("i-0abc"));
        assert!(screen.contains(" running "));
        assert_eq!(screen.matches("assets").count(), 1);
    }

    #[test]
    fn test_renders_messages() {
        let app = app_with(Vec::new());
        assert!(draw(&app).contains("No resources found"));

        let mut app = app_with(vec![Resource::new("web1", "i-1", "EC2", "us-east-1")]);
        app.select_region("eu-west-1");
        let screen = draw(&app);
        assert!(screen.contains("No resources match your filters"));
        assert!(screen.contains("Showing 0 of 1 resources"));

        app.begin_services_fetch();
        assert!(draw(&app).contains("Scanning resources..."));
    }
}
