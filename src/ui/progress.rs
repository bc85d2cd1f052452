//! Progress bar across the top of the wizard

use crate::app::App;
use crate::state::Step;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::LineGauge,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let label = format!("Step {} of {}", app.wizard.step.number(), Step::TOTAL);
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::Green))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label(label)
        .ratio(app.progress.ratio().clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}
