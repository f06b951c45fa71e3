use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{encouragement_message, Feedback};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.session.score();
    let total = app.session.catalog().len();
    let percentage = percentage(score, total);
    let grade_color = grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], app, score, total, percentage, grade_color);
    render_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    score: usize,
    total: usize,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}, here is your score", app.session.name()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            encouragement_message(score, total),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .session
        .catalog()
        .iter()
        .map(|question| {
            let feedback = app.session.feedback_for(question.id);
            let (symbol, color, note) = match feedback {
                Feedback::Correct => ("+", Color::Green, "correct, well done!".to_string()),
                Feedback::Incorrect => (
                    "-",
                    Color::Red,
                    format!("not quite, the answer is {}", question.correct_answer),
                ),
                Feedback::Unanswered => (
                    ".",
                    Color::DarkGray,
                    format!("unanswered, the answer is {}", question.correct_answer),
                ),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", question.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(question.prompt.clone(), Style::default().fg(Color::Gray)),
                Span::styled(format!("  ({})", note), Style::default().fg(color)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.results_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r try again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
