mod confirm;
mod results;
mod worksheet;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    if app.session.submitted() {
        results::render(frame, area, app);
    } else {
        worksheet::render(frame, area, app);
    }

    if app.session.reset_confirmation_pending() {
        confirm::render(frame, area, app);
    }
}
