//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, signed};
use crate::commands::{AnagramsResult, CheckResult};
use crate::session::SubmissionResult;
use colored::Colorize;

/// Print the outcome of every word in a check run
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        match &step.result {
            SubmissionResult::Ignored => {
                println!("\n{turn}: {}", "(blank, ignored)".bright_black());
            }
            SubmissionResult::Accepted { word, score } => {
                let points = signed(word.chars().count() as i64);
                println!(
                    "\n{turn}: {} {} {}",
                    "✓".green().bold(),
                    word.bright_white().bold(),
                    points.green()
                );
                println!("   Points: {score}");
            }
            SubmissionResult::Rejected {
                word,
                rejection,
                score,
            } => {
                let points = signed(-(word.chars().count() as i64));
                println!(
                    "\n{turn}: {} {} {}",
                    "✗".red().bold(),
                    word.bright_white(),
                    points.red()
                );
                println!("   {}: {}", rejection.title().red().bold(), rejection.message());
                println!("   Points: {score}");
            }
        }
    }

    let played = result.accepted_count() + result.rejected_count();
    println!();
    if played > 0 {
        let bar = create_progress_bar(result.accepted_count() as f64, played as f64, 30);
        println!(
            "Accepted: [{}] {}/{played}",
            bar.green(),
            result.accepted_count()
        );
    }

    let summary = format!("Final score: {}", result.final_score);
    if result.final_score >= 0 {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }
}

/// Print every word hidden in a root word
pub fn print_anagrams_result(result: &AnagramsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS IN:".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo words found.");
        return;
    }

    println!();
    for word in &result.words {
        println!("   {} {word}", length_badge(word.chars().count()));
    }

    println!("\n📊 {} words", result.words.len());
    println!(
        "   Max score:   {}",
        result.max_score.to_string().bright_yellow().bold()
    );
}
