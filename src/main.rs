//! Word Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{CheckConfig, check_words, find_anagrams, run_simple},
    config::GameConfig,
    dictionary::{Dictionary, Language},
    output::{print_anagrams_result, print_check_result},
    session::GameSession,
    wordlists::{EmbeddedSource, FileSource, WordSource},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell new words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: path to a file with one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary: path to a file with one word per line (default: built-in dictionary)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for picking root words, for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Spell-check language as an ISO 639-1 code
    #[arg(short, long, global = true, default_value = "en", value_parser = parse_language)]
    language: Language,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Play a list of words against a root word and show the score
    Check {
        /// Root word to play against
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },

    /// List every word hidden in a root word
    Anagrams {
        /// Root word to search
        root: String,
    },
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code)
        .ok_or_else(|| format!("unsupported language '{code}' (available: en)"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary based on the -d flag
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::load_from_file(path)
            .with_context(|| format!("Could not load dictionary from {}", path.display())),
        None => {
            let dictionary = Dictionary::embedded();
            tracing::debug!(words = dictionary.len(), "using embedded dictionary");
            Ok(dictionary)
        }
    }
}

/// Pick the root word source based on the -w flag
fn word_source(path: Option<&Path>) -> Box<dyn WordSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(EmbeddedSource),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let source = word_source(cli.wordlist.as_deref());

    let mut config = GameConfig {
        language: cli.language,
        ..GameConfig::default()
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, config, source.as_ref()),
        Commands::Simple => {
            let mut session = GameSession::new(dictionary, config);
            run_simple(&mut session, source.as_ref()).context("Simple mode failed")
        }
        Commands::Check { root, words } => run_check_command(root, words, dictionary, config),
        Commands::Anagrams { root } => run_anagrams_command(&root, dictionary, config),
    }
}

fn run_check_command(
    root: String,
    words: Vec<String>,
    dictionary: Dictionary,
    config: GameConfig,
) -> Result<()> {
    let mut session = GameSession::new(dictionary, config);
    let result =
        check_words(CheckConfig::new(root, words), &mut session).map_err(|e| anyhow::anyhow!(e))?;

    print_check_result(&result);
    Ok(())
}

fn run_anagrams_command(root: &str, dictionary: Dictionary, config: GameConfig) -> Result<()> {
    let session = GameSession::new(dictionary, config);
    let result = find_anagrams(root, session.checker(), session.validator())
        .map_err(|e| anyhow::anyhow!(e))?;

    print_anagrams_result(&result);
    Ok(())
}

fn run_play_command(
    dictionary: Dictionary,
    config: GameConfig,
    source: &dyn WordSource,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = GameSession::new(dictionary, config);
    let app = App::new(session, source);
    run_tui(app).context("Could not start the game")
}
