//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::spaced_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Root word
            Constraint::Min(8),    // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Accepted words
            Constraint::Percentage(45), // Progress and messages
        ])
        .split(chunks[1]);

    render_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            spaced_letters(app.session.root_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Score: {}", app.session.score()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_words<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let words = app.session.accepted_words();

    let items: Vec<ListItem> = if words.is_empty() {
        vec![
            ListItem::new("No words yet - start typing!")
                .style(Style::default().fg(Color::DarkGray)),
        ]
    } else {
        words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {:>2} ", word.chars().count()),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Words ({}) ", words.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let found = app.summary.found;
    let possible = app.summary.possible;
    let progress_pct = (app.summary.coverage() * 100.0).min(100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{found}/{possible}"));

    f.render_widget(gauge, area);
}

fn render_messages<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
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

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let (title, content, color) = match &app.input_mode {
        InputMode::Alert(alert) => (
            format!(" ⚠ {} | Enter to dismiss ", alert.title),
            alert.message.clone(),
            Color::Red,
        ),
        InputMode::Typing => (
            " Enter your word | Enter to submit ".to_string(),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round =
        Paragraph::new(format!("Round {}", app.session.round())).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Best: {} | Total words: {}",
        app.stats.best_score.max(app.session.score()),
        app.stats.total_words + app.session.score()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New Game | Ctrl+H: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::game::GameSession;
    use crate::wordlists::WordSource;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_root_word_and_words() {
        let source = WordSource::from_words(["roadworks"]).unwrap();
        let dictionary = WordListDictionary::from_words(["road", "sword"], "en").unwrap();
        let mut app = App::new(GameSession::seeded(&source, &dictionary, 1), &dictionary);
        app.input_buffer = "road".to_string();
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("R O A D W O R K S"));
        assert!(text.contains("Score: 1"));
        assert!(text.contains("road"));
        assert!(text.contains("1/2"));
    }

    #[test]
    fn renders_alert() {
        let source = WordSource::from_words(["roadworks"]).unwrap();
        let dictionary = WordListDictionary::from_words(["road"], "en").unwrap();
        let mut app = App::new(GameSession::seeded(&source, &dictionary, 1), &dictionary);
        app.input_buffer = "ro".to_string();
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Word is too short"));
    }
}
