//! Reset confirmation dialog, rendered over whichever screen is active.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let dialog = centered_rect(area, 54, 9);
    frame.render_widget(Clear, dialog);

    let message = if app.session.submitted() {
        "Do you want to start over and try again?"
    } else {
        "This will erase all your answers. Are you sure?"
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure?",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(message.fg(Color::White)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y] ", Style::default().fg(Color::Green).bold()),
            Span::styled("Yes, start over    ", Style::default().fg(Color::Gray)),
            Span::styled("[N] ", Style::default().fg(Color::Red).bold()),
            Span::styled("No, go back", Style::default().fg(Color::Gray)),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow),
    );
    frame.render_widget(widget, dialog);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
