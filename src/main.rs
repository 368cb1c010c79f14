//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: spell words from the letters of a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_words, run_simple},
    dictionary::WordListDictionary,
    game::GameSession,
    output::print_check_report,
    wordlists::{ResourceLocation, WordSource},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word pool: 'bundled' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,

    /// Dictionary: 'bundled' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "bundled")]
    dictionary: String,

    /// Seed for root word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check words against a given root word
    Check {
        /// The root word to spell from
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_scramble=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word source based on the -w and -d flags
fn load_word_source(wordlist: &str, dictionary: &str) -> Result<WordSource> {
    let pool = ResourceLocation::from_arg(wordlist);
    let dictionary = ResourceLocation::from_arg(dictionary);

    WordSource::load(&pool, &dictionary).context("Could not load word lists")
}

fn new_session(
    dictionary: &WordListDictionary,
    seed: Option<u64>,
) -> GameSession<&WordListDictionary> {
    match seed {
        Some(seed) => GameSession::seeded(dictionary, seed),
        None => GameSession::new(dictionary),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let source = load_word_source(&cli.wordlist, &cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&source, cli.seed),
        Commands::Simple => {
            let mut session = new_session(source.dictionary(), cli.seed);
            run_simple(&mut session, source.pool())
        }
        Commands::Check { root, words } => run_check_command(&root, &words, &source),
    }
}

fn run_check_command(root: &str, words: &[String], source: &WordSource) -> Result<()> {
    let report = check_words(root, words, source.dictionary())?;
    print_check_report(&report);
    Ok(())
}

fn run_play_command(source: &WordSource, seed: Option<u64>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = new_session(source.dictionary(), seed);
    let app = App::new(session, source.pool()).context("Could not start the first round")?;
    run_tui(app)
}
