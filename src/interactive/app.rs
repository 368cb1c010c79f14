//! TUI application state and logic

use crate::core::{SubmissionResult, letter_len};
use crate::dictionary::WordListDictionary;
use crate::error::GameError;
use crate::game::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest entry the input field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    pub session: GameSession<&'a WordListDictionary>,
    pub pool: &'a [String],
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub best_score: usize,
    pub should_quit: bool,
}

/// A rejection waiting to be acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if `pool` has no usable words.
    pub fn new(
        session: GameSession<&'a WordListDictionary>,
        pool: &'a [String],
    ) -> Result<Self, GameError> {
        let mut app = Self {
            session,
            pool,
            input_buffer: String::new(),
            messages: Vec::new(),
            alert: None,
            best_score: 0,
            should_quit: false,
        };

        app.add_message(
            "Welcome! Spell words using the letters of the root word.",
            MessageStyle::Info,
        );
        app.new_round()?;
        Ok(app)
    }

    /// Start a new round, keeping the best score seen so far
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if no root word can be drawn; the current
    /// round keeps going in that case.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        self.best_score = self.best_score.max(self.session.score());

        let root = self.session.start_round(self.pool)?.text().to_uppercase();
        self.input_buffer.clear();
        self.alert = None;
        self.add_message(&format!("New word: {root}"), MessageStyle::Info);
        Ok(())
    }

    /// Submit the contents of the input field
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_word(&input) {
            Ok(None) => {}
            Ok(Some(SubmissionResult::Accepted(word))) => {
                self.add_message(
                    &format!("+{} for {word}", letter_len(&word)),
                    MessageStyle::Success,
                );
            }
            Ok(Some(SubmissionResult::Rejected(reason))) => {
                let message = self
                    .session
                    .root_word()
                    .map(|root| reason.message(root))
                    .unwrap_or_default();
                self.add_message(reason.title(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message,
                });
                // Leave the word in the field so it can be corrected
                self.input_buffer = input;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
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
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.alert.is_some() {
            match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.alert = None,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => {
                if let Err(err) = self.new_round() {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl && self.input_buffer.chars().count() < MAX_INPUT_LEN => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal before reporting any failure from the event loop
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
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

    Ok(())
}
