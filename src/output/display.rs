//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_letters, word_with_badge};
use crate::commands::{CheckResult, SolveResult};
use crate::core::SubmissionResult;
use crate::solver::RoundSummary;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of solving a root word
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        spaced_letters(&result.root_word).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.total == 0 {
        println!("\n{}", "No playable words found.".red());
        return;
    }

    println!();
    for word in &result.words {
        println!("  {}", word_with_badge(word));
    }

    if result.words.len() < result.total {
        println!(
            "\n  {}",
            format!("… and {} more", result.total - result.words.len()).bright_black()
        );
    }

    println!(
        "\n{}",
        format!("📚 {} playable words", result.total).green().bold()
    );
}

/// Print the verdict of a single check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nRoot word: {}",
        spaced_letters(&result.root_word).bright_yellow().bold()
    );

    match &result.outcome {
        None => println!("{}", "Nothing to check: the word is blank.".bright_black()),
        Some(SubmissionResult::Accepted(word)) => {
            println!("{}", format!("✅ '{word}' is accepted!").green().bold());
        }
        Some(SubmissionResult::Rejected(_)) => {
            if let Some((title, message)) = result.explanation() {
                println!("{}", format!("❌ {title}").red().bold());
                println!("   {message}");
            }
        }
    }
}

/// Write how much of a round the player uncovered
///
/// Lists at most `show_missed` of the words the player did not find.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_summary<W: Write>(
    out: &mut W,
    summary: &RoundSummary<'_>,
    show_missed: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "ROUND SUMMARY:".bright_cyan().bold(),
        summary.root_word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let bar = create_progress_bar(summary.found as f64, summary.possible as f64, 30);
    writeln!(
        out,
        "\n   Found:  [{}] {}/{} ({:.0}%)",
        bar.green(),
        summary.found,
        summary.possible,
        summary.coverage() * 100.0
    )?;

    if !summary.missed.is_empty() && show_missed > 0 {
        writeln!(out, "\n   {}", "Words you missed:".bright_cyan())?;
        for word in summary.missed.iter().take(show_missed) {
            writeln!(out, "     {}", word_with_badge(word))?;
        }
        if summary.missed.len() > show_missed {
            writeln!(
                out,
                "     {}",
                format!("… and {} more", summary.missed.len() - show_missed).bright_black()
            )?;
        }
    }
    writeln!(out)
}
