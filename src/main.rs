//! Word Scramble - CLI
//!
//! Word anagram game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{SolveConfig, check_word, run_simple, solve_root},
    core::{DEFAULT_LANGUAGE, DEFAULT_MIN_LENGTH, GameRules},
    dictionary::WordListDictionary,
    game::GameSession,
    output::{print_check_result, print_solve_result},
    wordlists::WordSource,
};

/// Log file used while the TUI owns the terminal
const TUI_LOG_FILE: &str = "word_scramble_tui.log";

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default, English) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Minimum letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Dictionary language tag
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root words
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The root word of the round
        root_word: String,

        /// The word to check
        word: String,
    },

    /// List every word that can be made from a root word
    Solve {
        /// The root word to solve
        root_word: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Set up tracing; the TUI logs to a file so output does not tear the screen
fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_file {
        let log_file = File::create(TUI_LOG_FILE)
            .with_context(|| format!("Failed to create log file {TUI_LOG_FILE}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Load root words based on the -w flag
fn load_start_words(mode: &str) -> Result<WordSource> {
    match mode {
        "embedded" => WordSource::embedded().context("Couldn't load start words"),
        path => WordSource::from_file(path)
            .with_context(|| format!("Couldn't load start words from {path}")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(mode: &str, language: &str) -> Result<WordListDictionary> {
    match mode {
        "embedded" => {
            let dictionary = WordListDictionary::embedded().context("Couldn't load dictionary")?;
            if !dictionary.language().eq_ignore_ascii_case(language) {
                warn!(
                    requested = language,
                    available = dictionary.language(),
                    "Embedded dictionary does not cover the requested language"
                );
            }
            Ok(dictionary)
        }
        path => WordListDictionary::from_file(path, language)
            .with_context(|| format!("Couldn't load dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let rules = GameRules::new(cli.min_length, cli.language.clone());
    let source = load_start_words(&cli.start_words)?;
    let dictionary = load_dictionary(&cli.dictionary, &rules.language)?;
    info!(
        start_words = source.len(),
        dictionary_words = dictionary.len(),
        min_length = rules.min_length,
        language = %rules.language,
        "Word lists loaded"
    );

    match command {
        Commands::Play => run_play_command(&source, &dictionary, rules, cli.seed),
        Commands::Simple => run_simple_command(&source, &dictionary, rules, cli.seed),
        Commands::Check { root_word, word } => {
            run_check_command(&root_word, &word, &source, &dictionary, &rules)
        }
        Commands::Solve { root_word, limit } => {
            run_solve_command(root_word, limit, &dictionary, &rules)
        }
    }
}

fn new_session<'a>(
    source: &'a WordSource,
    dictionary: &'a WordListDictionary,
    rules: GameRules,
    seed: Option<u64>,
) -> GameSession<'a, &'a WordListDictionary> {
    let session = match seed {
        Some(seed) => GameSession::seeded(source, dictionary, seed),
        None => GameSession::new(source, dictionary),
    };
    session.with_rules(rules)
}

fn run_play_command(
    source: &WordSource,
    dictionary: &WordListDictionary,
    rules: GameRules,
    seed: Option<u64>,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(new_session(source, dictionary, rules, seed), dictionary);
    run_tui(app)
}

fn run_simple_command(
    source: &WordSource,
    dictionary: &WordListDictionary,
    rules: GameRules,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = new_session(source, dictionary, rules, seed);
    run_simple(&mut session, dictionary)?;
    Ok(())
}

fn run_check_command(
    root_word: &str,
    word: &str,
    source: &WordSource,
    dictionary: &WordListDictionary,
    rules: &GameRules,
) -> Result<()> {
    let result = check_word(root_word, word, source, dictionary, rules)?;
    print_check_result(&result);
    Ok(())
}

fn run_solve_command(
    root_word: String,
    limit: Option<usize>,
    dictionary: &WordListDictionary,
    rules: &GameRules,
) -> Result<()> {
    let config = SolveConfig::new(root_word).with_limit(limit);
    let result = solve_root(config, dictionary, rules)?;
    print_solve_result(&result);
    Ok(())
}
