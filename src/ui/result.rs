use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, SaveStatus};
use crate::rank::{classify, RankTier};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[1], app);
    render_controls(frame, chunks[3]);
}

fn get_rank_color(tier: RankTier) -> Color {
    match tier {
        RankTier::GoofyGoober => Color::Green,
        RankTier::Victory => Color::Cyan,
        RankTier::BoatingSchool => Color::Yellow,
        RankTier::Barnacles => Color::LightRed,
        RankTier::Plankton => Color::Red,
    }
}

fn detail_line<'t>(label: &'t str, value: String) -> Line<'t> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let total = session.total_questions();
    let score = session.final_score();
    let rank_color = get_rank_color(classify(score, total));

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    if let Some(record) = app.result() {
        content.push(detail_line("Name", record.name.clone()));
        content.push(detail_line("Age", record.age.to_string()));
        content.push(detail_line(
            "Time Watching SpongeBob",
            record.years_watched.clone(),
        ));
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("{} / {}", record.score, total),
            Style::default().fg(rank_color).bold(),
        )));
        content.push(Line::from(Span::styled(
            record.rank.clone(),
            Style::default().fg(rank_color).bold(),
        )));
    }

    content.push(Line::from(""));
    content.push(match app.save_status() {
        Some(SaveStatus::Saved(location)) => Line::from(Span::styled(
            format!("Result saved to {}", location),
            Style::default().fg(Color::DarkGray),
        )),
        Some(SaveStatus::Failed(message)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).bold(),
        )),
        None => Line::from(""),
    });

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
