//! Splash Screen
//!
//! Startup checklist shown while health, regions and services load.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Startup steps, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Health,
    Regions,
    Services,
}

impl Step {
    const ALL: [Step; 3] = [Step::Health, Step::Regions, Step::Services];

    fn label(self) -> &'static str {
        match self {
            Step::Health => "Checking backend health",
            Step::Regions => "Fetching regions",
            Step::Services => "Scanning resources",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Running,
    Done,
    Failed,
}

impl StepStatus {
    fn marker(self) -> Span<'static> {
        match self {
            StepStatus::Pending => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
            StepStatus::Running => Span::styled("[~]", Style::default().fg(Color::Yellow)),
            StepStatus::Done => Span::styled("[x]", Style::default().fg(Color::Green)),
            StepStatus::Failed => Span::styled("[!]", Style::default().fg(Color::Red)),
        }
    }
}

pub struct SplashState {
    target: String,
    statuses: [StepStatus; 3],
}

impl SplashState {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            statuses: [StepStatus::Pending; 3],
        }
    }

    pub fn begin(&mut self, step: Step) {
        self.statuses[step.index()] = StepStatus::Running;
    }

    pub fn finish(&mut self, step: Step, ok: bool) {
        self.statuses[step.index()] = if ok {
            StepStatus::Done
        } else {
            StepStatus::Failed
        };
    }

    pub fn status(&self, step: Step) -> StepStatus {
        self.statuses[step.index()]
    }

    /// Share of steps that have finished, failed ones included
    fn progress(&self) -> f64 {
        let finished = self
            .statuses
            .iter()
            .filter(|s| matches!(s, StepStatus::Done | StepStatus::Failed))
            .count();
        finished as f64 / self.statuses.len() as f64
    }
}

pub fn render(f: &mut Frame, state: &SplashState) {
    let [column] = Layout::horizontal([Constraint::Length(52)])
        .flex(Flex::Center)
        .areas(f.area());
    let [panel] = Layout::vertical([Constraint::Length(12)])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " tdisco ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let [heading, steps, gauge] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let heading_lines = vec![
        Line::from(Span::styled(
            "Cloud Service Discovery",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.target.clone(),
            Style::default().fg(Color::Yellow),
        )),
    ];
    f.render_widget(
        Paragraph::new(heading_lines).alignment(Alignment::Center),
        heading,
    );

    let step_lines: Vec<Line> = Step::ALL
        .iter()
        .map(|&step| {
            let status = state.status(step);
            let text_style = match status {
                StepStatus::Pending => Style::default().fg(Color::DarkGray),
                _ => Style::default().fg(Color::White),
            };
            Line::from(vec![
                Span::raw("  "),
                status.marker(),
                Span::raw(" "),
                Span::styled(step.label(), text_style),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(step_lines), steps);

    let percent = (state.progress() * 100.0).round() as u16;
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(percent),
        gauge,
    );
}
