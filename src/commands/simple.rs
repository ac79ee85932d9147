//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every line is a submission unless it starts with `:`.

use crate::dictionary::SpellChecker;
use crate::output::formatters::length_badge;
use crate::session::{GameEvent, GameSession, Snapshot};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    /// Start a round on a new root word
    NewRound,
    /// Show the words found so far
    ListWords,
    Help,
    Quit,
    /// Anything else is played as a word
    Submit(String),
}

impl SimpleInput {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        match trimmed.strip_prefix(':') {
            Some(command) => match command.trim().to_lowercase().as_str() {
                "new" | "n" => Self::NewRound,
                "words" | "w" => Self::ListWords,
                "quit" | "q" | "exit" => Self::Quit,
                _ => Self::Help,
            },
            None => Self::Submit(trimmed.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list cannot be read or on an I/O error.
pub fn run_simple<S: SpellChecker, W: WordSource + ?Sized>(
    session: &mut GameSession<S>,
    source: &W,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, source, stdin.lock(), stdout.lock())
}

/// Run the simple mode against arbitrary input and output streams
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if the word list cannot be read or on an I/O error.
pub fn run_simple_with<S, W, R, O>(
    session: &mut GameSession<S>,
    source: &W,
    input: R,
    mut output: O,
) -> Result<()>
where
    S: SpellChecker,
    W: WordSource + ?Sized,
    R: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Word Scramble - Simple Mode                 ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make words from the letters of the root word.")?;
    writeln!(output, "Each new word scores its length; each bad word costs the same.\n")?;
    print_help(&mut output)?;

    session.start_round_from(source)?;
    print_event(&mut output, &session.round_started_event())?;

    let mut lines = input.lines();

    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };

        match SimpleInput::parse(&line?) {
            SimpleInput::Quit => break,
            SimpleInput::NewRound => {
                session.start_round_from(source)?;
                print_event(&mut output, &session.round_started_event())?;
            }
            SimpleInput::ListWords => print_words(&mut output, &session.snapshot())?,
            SimpleInput::Help => print_help(&mut output)?,
            SimpleInput::Submit(word) => {
                if let Some(event) = session.submit(&word).event() {
                    print_event(&mut output, &event)?;
                }
            }
        }
    }

    writeln!(
        output,
        "\n👋 Thanks for playing! Final score: {}\n",
        session.score()
    )?;
    Ok(())
}

fn print_help<O: Write>(output: &mut O) -> io::Result<()> {
    writeln!(
        output,
        "Commands: ':new' for another word, ':words' to list your words, ':quit' to exit\n"
    )
}

fn print_words<O: Write>(output: &mut O, snapshot: &Snapshot) -> io::Result<()> {
    if snapshot.used_words.is_empty() {
        return writeln!(output, "No words yet!\n");
    }

    for word in &snapshot.used_words {
        writeln!(output, "  {} {word}", length_badge(word.chars().count()))?;
    }
    writeln!(
        output,
        "{} words, {} letters\n",
        snapshot.used_words.len(),
        snapshot.letters_found()
    )
}

fn print_event<O: Write>(output: &mut O, event: &GameEvent) -> io::Result<()> {
    match event {
        GameEvent::RoundStarted { root_word } => {
            writeln!(output, "────────────────────────────────────────────────────────────")?;
            writeln!(
                output,
                "Root word: {}",
                root_word.to_uppercase().bright_yellow().bold()
            )?;
            writeln!(output, "────────────────────────────────────────────────────────────")
        }
        GameEvent::Accepted { word, score } => writeln!(
            output,
            "{} {}   Points: {score}",
            "✓".green().bold(),
            word.bright_white().bold()
        ),
        GameEvent::Rejected {
            title,
            message,
            score,
        } => writeln!(
            output,
            "{} {} {message}   Points: {score}",
            "✗".red().bold(),
            title.red().bold()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::dictionary::Dictionary;
    use crate::wordlists::WordListError;

    struct OnlySilkworm;

    impl WordSource for OnlySilkworm {
        fn words(&self) -> Result<Vec<String>, WordListError> {
            Ok(vec!["silkworm".to_string()])
        }
    }

    fn play(script: &str) -> (GameSession, String) {
        colored::control::set_override(false);

        let mut session = GameSession::new(
            Dictionary::from_words(["silk", "worm", "new"]),
            GameConfig::default(),
        );
        let mut output = Vec::new();
        run_simple_with(&mut session, &OnlySilkworm, script.as_bytes(), &mut output).unwrap();

        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleInput::parse(":new"), SimpleInput::NewRound);
        assert_eq!(SimpleInput::parse(" :Q "), SimpleInput::Quit);
        assert_eq!(SimpleInput::parse(":words"), SimpleInput::ListWords);
        assert_eq!(SimpleInput::parse(":what"), SimpleInput::Help);
    }

    #[test]
    fn parse_plain_words_are_submissions() {
        assert_eq!(
            SimpleInput::parse("new"),
            SimpleInput::Submit("new".to_string())
        );
        assert_eq!(SimpleInput::parse(""), SimpleInput::Submit(String::new()));
    }

    #[test]
    fn plays_until_quit() {
        let (session, output) = play("silk\nsilk\n:quit\nworm\n");

        assert_eq!(session.score(), 0);
        assert_eq!(session.used_words(), ["silk"]);
        assert!(output.contains("SILKWORM"));
        assert!(output.contains("Word used already"));
        assert!(output.contains("Final score: 0"));
    }

    #[test]
    fn ends_at_end_of_input() {
        let (session, output) = play("worm\n");

        assert_eq!(session.score(), 4);
        assert!(output.contains("Final score: 4"));
    }

    #[test]
    fn new_round_resets_score() {
        let (session, _) = play("silk\n:new\n");

        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (session, _) = play("\n   \n");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn words_command_lists_found_words() {
        let (_, output) = play("silk\nworm\n:words\n");
        assert!(output.contains("④ worm"));
        assert!(output.contains("④ silk"));
        assert!(output.contains("2 words, 8 letters"));
    }

    #[test]
    fn rejections_print_alert_text() {
        let (_, output) = play("word\nsilkworm\n");
        assert!(output.contains("Word not possible You can't spell that word from 'silkworm'!"));
        assert!(output.contains("Word not recognized That isn't a real word.   Points: -12"));
    }
}
