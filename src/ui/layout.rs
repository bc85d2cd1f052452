//! Layout components (header, progress, status bar)

use crate::app::App;
use crate::state::{Focus, Step};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen
pub struct ScreenLayout {
    pub header: Rect,
    pub progress: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Split the screen, keeping the wizard at a readable width
pub fn create_layout(area: Rect) -> ScreenLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Max(72), // Wizard column
            Constraint::Min(0),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Step
        ])
        .split(columns[1]);

    // Status bar spans the full width on the last line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    ScreenLayout {
        header: rows[0],
        progress: rows[1],
        body: rows[2].intersection(outer[0]),
        status: outer[1],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Contact",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

/// Key hints for the current focus
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let step = app.wizard.step;
    let mut hints = Vec::new();

    match app.focus {
        Focus::Input if step == Step::Three => {
            hints.push(("Enter", "newline"));
            hints.push(("Ctrl+S", "submit"));
        }
        Focus::Input => hints.push(("Enter", "next")),
        Focus::Buttons(_) => {
            hints.push(("←→", "select"));
            hints.push(("Enter", "press"));
        }
    }
    hints.push(("Tab", "focus"));
    if app.wizard.can_go_back() {
        hints.push(("Esc", "back"));
    }
    hints.push(("Ctrl+C", "quit"));
    hints
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if app.wizard.loading {
        spans.push(Span::styled(
            " Submitting... ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    }
    for (key, action) in hints(app) {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
