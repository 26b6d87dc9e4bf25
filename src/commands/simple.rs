//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Lines starting with `:` are commands;
//! everything else is submitted as a word.

use super::CommandError;
use crate::core::SubmissionResult;
use crate::dictionary::{Dictionary, WordListDictionary};
use crate::game::GameSession;
use crate::output::formatters::{rejection_line, spaced_letters, word_with_badge};
use crate::output::write_round_summary;
use crate::solver::summarize_round;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// How many missed words `:reveal` lists
const REVEAL_LIMIT: usize = 15;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary, R: Rng>(
    session: &mut GameSession<'_, D, R>,
    reveal_dictionary: &WordListDictionary,
) -> Result<(), CommandError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, reveal_dictionary, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<D, R, I, O>(
    session: &mut GameSession<'_, D, R>,
    reveal_dictionary: &WordListDictionary,
    mut input: I,
    mut output: O,
) -> Result<(), CommandError>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(
        output,
        "Words need at least {} letters. One point per word.\n",
        session.rules().min_length
    )?;
    writeln!(output, "Commands: :new, :words, :reveal, :help, :quit\n")?;

    print_round_banner(session, &mut output)?;

    loop {
        let Some(line) = read_line(&mut input, &mut output, "Word")? else {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Thanks for playing! Final score: {}\n", session.score())?;
                return Ok(());
            }
            ":new" | ":n" => {
                session.start_round();
                writeln!(output, "\n🔄 New game started!\n")?;
                print_round_banner(session, &mut output)?;
            }
            ":words" | ":w" => print_accepted(session, &mut output)?,
            ":reveal" | ":r" => {
                let summary = summarize_round(
                    session.root_word(),
                    session.accepted_words(),
                    reveal_dictionary,
                    session.rules(),
                );
                info!(
                    root_word = %summary.root_word,
                    found = summary.found,
                    possible = summary.possible,
                    "Round revealed"
                );
                write_round_summary(&mut output, &summary, REVEAL_LIMIT)?;
            }
            ":help" | ":h" | ":?" => {
                writeln!(output, "  :new     start a new round")?;
                writeln!(output, "  :words   list your words")?;
                writeln!(output, "  :reveal  show words you have not found yet")?;
                writeln!(output, "  :quit    leave the game\n")?;
            }
            command if command.starts_with(':') => {
                writeln!(output, "❌ Unknown command '{command}'. Type :help for help.\n")?;
            }
            word => match session.submit(word) {
                None => {}
                Some(SubmissionResult::Accepted(word)) => {
                    writeln!(
                        output,
                        "{} Score: {}\n",
                        format!("✓ {word} (+1)").green().bold(),
                        session.score()
                    )?;
                }
                Some(SubmissionResult::Rejected(reason)) => {
                    let line = rejection_line(reason, session.root_word(), session.rules());
                    writeln!(output, "{}\n", format!("✗ {line}").red())?;
                }
            },
        }
    }
}

fn print_round_banner<D: Dictionary, R: Rng, O: Write>(
    session: &GameSession<'_, D, R>,
    output: &mut O,
) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Round {}: {}",
        session.round(),
        spaced_letters(session.root_word()).bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────\n")
}

fn print_accepted<D: Dictionary, R: Rng, O: Write>(
    session: &GameSession<'_, D, R>,
    output: &mut O,
) -> io::Result<()> {
    writeln!(output, "\nScore: {}", session.score())?;
    for word in session.accepted_words() {
        writeln!(output, "  {}", word_with_badge(word))?;
    }
    writeln!(output)
}

/// Prompt and read one line; `None` on end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
