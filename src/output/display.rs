//! Display functions for round state and command results

use super::formatters::{spaced_letters, word_with_count, words_label};
use crate::commands::CheckReport;
use crate::core::{RootWord, SubmissionResult};
use colored::Colorize;

/// Print the root word banner at the start of a round
pub fn print_round_header(root: &RootWord, round: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Round {}: {}  {}",
        round,
        spaced_letters(root.text()).bright_yellow().bold(),
        format!("({} letters)", root.letter_count()).dimmed()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the outcome of one submission
pub fn print_submission(result: &SubmissionResult, root: &RootWord, score: usize) {
    match result {
        SubmissionResult::Accepted(word) => {
            println!(
                "{} {}  {}",
                "✅".green(),
                word_with_count(word).bright_white().bold(),
                format!("Score: {score}").bright_cyan()
            );
        }
        SubmissionResult::Rejected(reason) => {
            println!("{} {}", "❌".red(), reason.title().red().bold());
            println!("   {}", reason.message(root));
        }
    }
}

/// Print the words found so far, most recent first
pub fn print_used_words(used_words: &[String], score: usize) {
    println!(
        "\n📋 {} {} found, score {}",
        used_words.len(),
        words_label(used_words.len()),
        score.to_string().bright_yellow().bold()
    );
    for word in used_words {
        println!("   • {}", word_with_count(word));
    }
}

/// Print the result of the check command
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CHECKING AGAINST:".bright_cyan().bold(),
        spaced_letters(&report.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for checked in &report.checked {
        match &checked.result {
            None => println!("\n{:<16} {}", checked.input, "(blank, ignored)".bright_black()),
            Some(SubmissionResult::Accepted(word)) => {
                println!("\n{:<16} {}", word, "accepted".green().bold());
            }
            Some(SubmissionResult::Rejected(reason)) => {
                println!("\n{:<16} {}", checked.input, reason.title().red().bold());
            }
        }
    }

    println!(
        "\n📊 {} of {} accepted, final score {}",
        report.accepted_count(),
        report.checked.len(),
        report.score.to_string().bright_yellow().bold()
    );
}
