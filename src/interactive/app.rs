//! TUI application state and logic
//!
//! The app owns the session and keeps the latest `Snapshot` for rendering. Rendering
//! never touches the session directly.

use crate::commands::find_anagrams;
use crate::dictionary::Dictionary;
use crate::output::formatters::signed;
use crate::session::{GameEvent, GameSession, Snapshot};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the input field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    session: GameSession<Dictionary>,
    pub source: &'a dyn WordSource,
    pub snapshot: Snapshot,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub round: RoundInfo,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

/// Rejection shown until the player dismisses it
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

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What the current root word has to offer
#[derive(Debug, Default, Clone)]
pub struct RoundInfo {
    pub rounds_played: usize,
    pub findable_words: usize,
    pub max_score: i64,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: GameSession<Dictionary>, source: &'a dyn WordSource) -> Self {
        let snapshot = session.snapshot();

        Self {
            session,
            source,
            snapshot,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Welcome! Spell words using the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            round: RoundInfo::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Draw a new root word and reset the round
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be read.
    pub fn new_round(&mut self) -> Result<()> {
        self.session.start_round_from(self.source)?;
        self.input_buffer.clear();
        self.alert = None;
        self.input_mode = InputMode::Typing;

        let anagrams = find_anagrams(
            self.session.root_word(),
            self.session.checker(),
            self.session.validator(),
        )
        .map_err(|e| anyhow::anyhow!(e))?;

        self.round.rounds_played += 1;
        self.round.findable_words = anagrams.words.len();
        self.round.max_score = anagrams.max_score;

        self.apply_event(self.session.round_started_event());
        Ok(())
    }

    /// Submit the input buffer and clear it, whatever the outcome
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        if let Some(event) = self.session.submit(&input).event() {
            self.apply_event(event);
        }
    }

    /// Bring the screen up to date with one event from the session
    fn apply_event(&mut self, event: GameEvent) {
        let previous_score = self.snapshot.score;
        self.snapshot = self.session.snapshot();

        match event {
            GameEvent::RoundStarted { root_word } => self.add_message(
                &format!(
                    "New word: {} ({} words to find)",
                    root_word.to_uppercase(),
                    self.round.findable_words
                ),
                MessageStyle::Info,
            ),
            GameEvent::Accepted { word, score } => self.add_message(
                &format!("{} {}", word.to_uppercase(), signed(score - previous_score)),
                MessageStyle::Success,
            ),
            GameEvent::Rejected {
                title,
                message,
                score,
            } => {
                self.add_message(
                    &format!("{title} {}", signed(score - previous_score)),
                    MessageStyle::Error,
                );
                self.alert = Some(Alert { title, message });
                self.input_mode = InputMode::Alert;
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
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
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new round fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.new_round()?,
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    }
                }
                _ => {}
            },
        }

        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // Fail before touching the terminal if the word list is unavailable
    app.new_round()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    println!("Final score: {}", app.snapshot.score);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::WordListError;

    struct Fixed(&'static str);

    impl WordSource for Fixed {
        fn words(&self) -> Result<Vec<String>, WordListError> {
            Ok(vec![self.0.to_string()])
        }
    }

    fn app(source: &Fixed) -> App<'_> {
        let session = GameSession::new(
            Dictionary::from_words(["silk", "worm", "milk", "ball"]),
            GameConfig::default().with_seed(3),
        );
        let mut app = App::new(session, source);
        app.new_round().unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn new_round_counts_findable_words() {
        let source = Fixed("silkworm");
        let app = app(&source);

        assert_eq!(app.snapshot.root_word, "silkworm");
        assert_eq!(app.round.findable_words, 3);
        assert_eq!(app.round.max_score, 12);
        assert_eq!(app.round.rounds_played, 1);
    }

    #[test]
    fn typing_and_enter_submits_word() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        type_word(&mut app, "silk");

        assert_eq!(app.snapshot.used_words, vec!["silk"]);
        assert_eq!(app.snapshot.score, 4);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn rejection_opens_alert_and_clears_input() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        type_word(&mut app, "silk");
        type_word(&mut app, "silk");

        assert_eq!(app.input_mode, InputMode::Alert);
        assert_eq!(
            app.alert,
            Some(Alert {
                title: "Word used already".to_string(),
                message: "Be more original".to_string(),
            })
        );
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.snapshot.score, 0);
    }

    #[test]
    fn messages_follow_session_events() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        assert_eq!(
            app.messages.last().unwrap().text,
            "New word: SILKWORM (3 words to find)"
        );

        type_word(&mut app, "milk");
        assert_eq!(app.messages.last().unwrap().text, "MILK +4");

        type_word(&mut app, "word");
        assert_eq!(app.messages.last().unwrap().text, "Word not possible -4");
        assert_eq!(
            app.alert.as_ref().map(|a| a.message.as_str()),
            Some("You can't spell that word from 'silkworm'!")
        );
        assert_eq!(app.snapshot.score, 0);
    }

    #[test]
    fn snapshot_matches_session_after_every_key() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        for word in ["silk", "silk", "is", "worm"] {
            type_word(&mut app, word);
            assert_eq!(app.snapshot, app.session.snapshot());
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.snapshot.used_words, vec!["worm", "silk"]);
    }

    #[test]
    fn alert_swallows_typing_until_dismissed() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        type_word(&mut app, "xyz");
        press(&mut app, KeyCode::Char('m'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.alert.is_none());
    }

    #[test]
    fn backspace_edits_input() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn blank_enter_changes_nothing() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.snapshot.score, 0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn tab_starts_another_round() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        type_word(&mut app, "silk");
        press(&mut app, KeyCode::Tab);

        assert!(app.snapshot.used_words.is_empty());
        assert_eq!(app.snapshot.score, 0);
        assert_eq!(app.round.rounds_played, 2);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let source = Fixed("silkworm");

        let mut escaped = app(&source);
        press(&mut escaped, KeyCode::Esc);
        assert!(escaped.should_quit);

        let mut interrupted = app(&source);
        interrupted
            .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(interrupted.should_quit);
        assert!(interrupted.input_buffer.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let source = Fixed("silkworm");
        let mut app = app(&source);

        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), 5);
    }
}
