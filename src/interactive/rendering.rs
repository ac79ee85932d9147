//! TUI rendering with ratatui
//!
//! Everything drawn here comes from the app's latest `Snapshot`.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::length_badge;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(6),    // Main content
            Constraint::Length(3), // Score
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Used words
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_score(f, app, chunks[3]);
    render_help(f, app, chunks[4]);

    if app.input_mode == InputMode::Alert {
        render_alert(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.snapshot.root_word.to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (content, color) = if app.input_buffer.is_empty() {
        ("Enter your word", Color::DarkGray)
    } else {
        (app.input_buffer.as_str(), Color::White)
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.snapshot.used_words.is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.snapshot
            .used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        length_badge(word.chars().count()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(" "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect()
    };

    let title = format!(
        " Your Words ({}/{}) ",
        app.snapshot.used_words.len(),
        app.round.findable_words
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.snapshot.score;
    let max_score = app.round.max_score;
    let percent = if max_score > 0 {
        (score.clamp(0, max_score) * 100 / max_score) as u16
    } else {
        0
    };
    let color = if score < 0 { Color::Red } else { Color::Green };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("Points: {score} / {max_score}"));

    f.render_widget(gauge, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: Submit | Tab: Another Word | Esc: Quit",
        InputMode::Alert => "Enter: OK",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, app: &App) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered_rect(50, 7, f.area());
    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rect of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
