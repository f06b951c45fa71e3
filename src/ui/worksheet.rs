use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph},
};

use crate::app::{App, Focus};

const OPTION_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Lines each question block occupies in the list.
const QUESTION_HEIGHT: usize = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(1), // Progress gauge
        Constraint::Length(3), // Name entry
        Constraint::Fill(1),   // Questions
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_progress(frame, chunks[1], app);
    render_name_entry(frame, chunks[2], app);
    render_questions(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "MATH WORKSHEET",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Rounding Off to Nearest 10".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = app.session.progress();
    let label = format!(
        "Answered: {} of {}  ({:.0}%)",
        progress.answered,
        progress.total,
        progress.percentage()
    );

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(progress.percentage() / 100.0)
        .label(label);
    frame.render_widget(widget, area);
}

fn render_name_entry(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Name;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let mut name_line = vec![
        Span::styled(if focused { "> " } else { "  " }, label_style),
        Span::styled("What's your name? ", label_style),
        Span::styled(app.session.name(), Style::default().fg(Color::Yellow)),
    ];
    if focused {
        name_line.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let mut content = vec![Line::from(""), Line::from(name_line)];
    if app.session.name_validation_failed() {
        content.push(Line::from(Span::styled(
            "  Oops! Don't forget to write your name!",
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(content), area);
}

fn render_questions(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for (index, question) in app.session.catalog().iter().enumerate() {
        let focused = app.focus() == Focus::Question(index);
        let answered = app.session.answer(question.id).is_some();

        let header_style = if focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };

        let mut header = vec![
            Span::styled(if focused { "> " } else { "  " }, header_style),
            Span::styled(format!("Question {}", question.id), header_style),
        ];
        if answered {
            header.push(Span::styled("  +", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(
            format!("  {}", question.prompt),
            Style::default().fg(Color::Gray),
        )));

        for (slot, option) in question.options.iter().enumerate() {
            let selected = app.session.answer(question.id) == Some(option.as_str());
            let style = if selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if selected { "*" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(format!("   {} ", marker), style),
                Span::styled(format!("{}) ", OPTION_LABELS[slot]), style),
                Span::styled(option.as_str(), style),
            ]));
        }
        lines.push(Line::from(""));
    }

    let scroll = question_scroll(app, area.height as usize, lines.len());
    let widget = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

/// Keep the focused question in view without scrolling past the end.
fn question_scroll(app: &App, viewport: usize, total_lines: usize) -> usize {
    let Focus::Question(index) = app.focus() else {
        return 0;
    };
    let max_scroll = total_lines.saturating_sub(viewport);
    (index * QUESTION_HEIGHT).min(max_scroll)
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k move  ·  a-d answer  ·  enter submit  ·  r reset  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
