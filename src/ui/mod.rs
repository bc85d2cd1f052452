//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod layout;
mod progress;
mod step_view;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header);
    progress::draw(frame, screen.progress, app);
    step_view::draw(frame, screen.body, app);
    layout::draw_status_bar(frame, screen.status, app);

    // Notices are modal and drawn last
    if let Some(notice) = app.notices.current() {
        components::render_notice_dialog(frame, notice);
    }
}
