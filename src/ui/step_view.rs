//! Step rendering
//!
//! One stateless view serves all three steps; what differs between them is
//! captured in a [`StepSpec`].

use super::components::{button_width, render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_input, InputConfig};
use crate::app::App;
use crate::state::{Field, Focus, Step, StepButton};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Kind of input shown on a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

/// Static description of a step
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub title: &'static str,
    pub field: Field,
    pub kind: InputKind,
    pub placeholder: &'static str,
}

impl StepSpec {
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::One => Self {
                title: "Step 1: Your Name",
                field: Field::Name,
                kind: InputKind::Text,
                placeholder: "Enter your name",
            },
            Step::Two => Self {
                title: "Step 2: Your Email",
                field: Field::Email,
                kind: InputKind::Email,
                placeholder: "Enter your email",
            },
            Step::Three => Self {
                title: "Step 3: Your Message",
                field: Field::Message,
                kind: InputKind::TextArea,
                placeholder: "Enter your message",
            },
        }
    }
}

/// Draw the current step: title, input and button row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.wizard.step;
    let spec = StepSpec::for_step(step);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_height = match spec.kind {
        InputKind::TextArea => Constraint::Min(5),
        InputKind::Text | InputKind::Email => Constraint::Length(3),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Title
            input_height,                      // Input
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),                // Remaining space
        ])
        .margin(1)
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        spec.title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    draw_input(
        frame,
        chunks[1],
        InputConfig {
            label: spec.field.label(),
            value: app.wizard.data.get(spec.field),
            placeholder: spec.placeholder,
            is_active: app.focus == Focus::Input,
            is_multiline: spec.kind == InputKind::TextArea,
        },
    );

    draw_buttons(frame, chunks[3], app);
}

/// Buttons are right-aligned, in the order given by `StepButton::for_step`
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.wizard.step;
    let buttons = StepButton::for_step(step);
    let selected = app.focus.selected_button(step);

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(
        buttons
            .iter()
            .map(|b| Constraint::Length(button_width(b.label(app.wizard.loading)))),
    );
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(1)
        .split(area);

    for (button, chunk) in buttons.iter().zip(chunks.iter().skip(1)) {
        let accent = match button {
            StepButton::Submit => Some(Color::Green),
            StepButton::Next => Some(Color::Cyan),
            StepButton::Back => None,
        };
        render_button(
            frame,
            *chunk,
            button.label(app.wizard.loading),
            selected == Some(*button),
            app.is_enabled(*button),
            accent,
        );
    }
}
