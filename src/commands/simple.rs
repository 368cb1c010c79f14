//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::dictionary::Dictionary;
use crate::game::GameSession;
use crate::output::{print_round_header, print_submission, print_used_words};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Commands recognized at the word prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    NewRound,
    ShowWords,
    Quit,
    Submit(&'a str),
}

impl<'a> Command<'a> {
    /// Anything that is not a `:`-command is a submission
    #[must_use]
    pub fn parse(input: &'a str) -> Self {
        match input.trim() {
            ":new" | ":n" => Self::NewRound,
            ":words" | ":w" => Self::ShowWords,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Submit(input),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if the pool is empty when a round is started or if reading
/// input fails.
pub fn run_simple<D: Dictionary, R: Rng>(
    session: &mut GameSession<D, R>,
    pool: &[String],
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Words need at least 3 letters; each word scores its length.\n");
    println!("Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit\n");

    start_round(session, pool)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        let Some(input) = get_user_input(&mut lines, "Your word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewRound => start_round(session, pool)?,
            Command::ShowWords => print_used_words(session.used_words(), session.score()),
            Command::Submit(raw) => {
                if let Some(result) = session.submit_word(raw)?
                    && let Some(root) = session.root_word()
                {
                    print_submission(&result, root, session.score());
                }
            }
        }
    }
}

fn start_round<D: Dictionary, R: Rng>(
    session: &mut GameSession<D, R>,
    pool: &[String],
) -> Result<()> {
    session
        .start_round(pool)
        .context("Could not start a new round")?;

    if let Some(root) = session.root_word() {
        print_round_header(root, session.rounds_started());
    }
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
