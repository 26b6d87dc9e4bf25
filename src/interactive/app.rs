//! TUI application state and logic

use crate::core::{Rejection, SubmissionResult};
use crate::dictionary::{Dictionary, WordListDictionary};
use crate::game::GameSession;
use crate::solver::{RoundSummary, summarize_round};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Longest word the input box accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a, D: Dictionary> {
    pub session: GameSession<'a, D>,
    pub reveal_dictionary: &'a WordListDictionary,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Summary of the current round against `reveal_dictionary`
    pub summary: RoundSummary<'a>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    /// A rejection is on screen; any dismiss key returns to typing
    Alert(Alert),
}

/// Title/message pair shown for a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn from_rejection<D: Dictionary>(
        reason: Rejection,
        session: &GameSession<'_, D>,
    ) -> Self {
        Self {
            title: reason.title().to_string(),
            message: reason.message(session.root_word(), session.rules()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub total_words: usize,
    pub best_score: usize,
}

impl Statistics {
    fn record_round(&mut self, score: usize) {
        self.rounds_played += 1;
        self.total_words += score;
        self.best_score = self.best_score.max(score);
    }
}

impl<'a, D: Dictionary> App<'a, D> {
    #[must_use]
    pub fn new(session: GameSession<'a, D>, reveal_dictionary: &'a WordListDictionary) -> Self {
        let summary = summarize_round(
            session.root_word(),
            session.accepted_words(),
            reveal_dictionary,
            session.rules(),
        );
        Self {
            session,
            reveal_dictionary,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            summary,
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    fn refresh_summary(&mut self) {
        self.summary = summarize_round(
            self.session.root_word(),
            self.session.accepted_words(),
            self.reveal_dictionary,
            self.session.rules(),
        );
    }

    /// Submit whatever is in the input box
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            None => {}
            Some(SubmissionResult::Accepted(word)) => {
                self.refresh_summary();
                self.add_message(
                    &format!("'{word}' accepted! Score: {}", self.session.score()),
                    MessageStyle::Success,
                );
            }
            Some(SubmissionResult::Rejected(reason)) => {
                self.input_mode = InputMode::Alert(Alert::from_rejection(reason, &self.session));
            }
        }
    }

    pub fn new_game(&mut self) {
        self.stats.record_round(self.session.score());
        self.session.start_round();
        self.refresh_summary();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message(
            &format!(
                "New game! {} words hide in '{}'.",
                self.summary.possible,
                self.session.root_word()
            ),
            MessageStyle::Info,
        );
    }

    /// Show a few words the player has not found yet
    pub fn reveal_hint(&mut self) {
        if let Some(longest) = self.summary.missed.first() {
            let text = format!(
                "Hint: {} letters, starts with '{}' ({} left)",
                longest.chars().count(),
                longest.chars().next().unwrap_or_default(),
                self.summary.missed.len()
            );
            self.add_message(&text, MessageStyle::Info);
        } else {
            self.add_message("You found every word!", MessageStyle::Success);
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.input_mode = InputMode::Typing;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('h') => self.reveal_hint(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Alert(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    } else {
                        self.add_message(
                            &format!("Words are at most {MAX_INPUT_LEN} letters"),
                            MessageStyle::Error,
                        );
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<'_, D>) -> Result<()> {
    info!(root_word = %app.session.root_word(), "Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    log_exit(res)
}

/// Log a failed run; the error is still handed back to the caller
fn log_exit(res: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(error = %err, "TUI exited with an error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        rounds = app.stats.rounds_played + 1,
        final_score = app.session.score(),
        "Leaving TUI"
    );
    Ok(())
}
