use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FormField};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(15),
        Constraint::Fill(1),
    ])
    .split(area);

    let form = app.form();
    let total = app.session().total_questions();

    let error_line = match form.error {
        Some(err) => Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))),
        None => Line::from(""),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "BIKINI BOTTOM QUIZ",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(format!("{} Questions · One Player", total).fg(Color::DarkGray)),
        Line::from(""),
        field_line("Name", &form.name, form.focus == FormField::Name),
        field_line("Age", &form.age, form.focus == FormField::Age),
        choice_line(
            "Watching for",
            form.watch_duration.label(),
            form.focus == FormField::WatchDuration,
        ),
        Line::from(""),
        error_line,
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("tab next field  ·  ←/→ change  ·  esc quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn field_line<'t>(label: &'t str, value: &'t str, focused: bool) -> Line<'t> {
    let cursor = if focused { "_" } else { " " };
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style(focused)),
        Span::styled(value, Style::default().fg(Color::Yellow)),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}

fn choice_line<'t>(label: &'t str, value: &'t str, focused: bool) -> Line<'t> {
    let (left, right) = if focused { ("< ", " >") } else { ("  ", "  ") };
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style(focused)),
        Span::styled(left, label_style(focused)),
        Span::styled(value, Style::default().fg(Color::Yellow)),
        Span::styled(right, label_style(focused)),
    ])
}
