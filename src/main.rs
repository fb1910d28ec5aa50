//! Wordle Hints - CLI
//!
//! Suggests next guesses from the clues of a Wordle game in progress.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordle_hints::{
    commands::{SolutionsConfig, find_solutions, letter_distribution, score_guess},
    output::{print_distribution_result, print_report, print_score_result},
    wordlists::DictionarySource,
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Wordle helper: filter words by green/yellow/grey clues and rank them by letter frequency",
    long_about = "Wordle helper: filter words by green/yellow/grey clues and rank them by letter frequency.\n\n\
                  The built-in word list is a small sample. For full results pass the complete \
                  words_alpha_five_letters.txt with --dictionary or WORDLE_DICTIONARY.",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Flat word file to use instead of the bundled sample (e.g. the full words_alpha_five_letters.txt)
    #[arg(short, long, global = true, env = "WORDLE_DICTIONARY")]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Given the current state of a game, suggest the best next guesses
    Solutions {
        /// Letters with a known position, e.g. `--green A2,Y5`
        #[arg(long)]
        green: Option<String>,

        /// Letters in the word and the positions they cannot be, e.g. `--yellow A13,Y1234`
        #[arg(long)]
        yellow: Option<String>,

        /// Letters known not to be in the word, e.g. `--grey R,C`
        #[arg(long)]
        grey: Option<String>,
    },

    /// Show how a single word scores
    Score {
        /// The word to score
        word: String,
    },

    /// Show letter counts across the dictionary
    Distribution,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = DictionarySource::from_path(cli.dictionary);
    info!("using dictionary: {dictionary}");

    match cli.command {
        Commands::Solutions {
            green,
            yellow,
            grey,
        } => run_solutions_command(SolutionsConfig {
            green,
            yellow,
            grey,
            dictionary,
        }),
        Commands::Score { word } => run_score_command(&word, &dictionary),
        Commands::Distribution => run_distribution_command(&dictionary),
    }
}

fn run_solutions_command(config: SolutionsConfig) -> Result<()> {
    let report = find_solutions(&config).context("Could not produce solutions")?;
    print_report(&report);
    Ok(())
}

fn run_score_command(word: &str, dictionary: &DictionarySource) -> Result<()> {
    let result = score_guess(word, dictionary).with_context(|| format!("Could not score {word}"))?;
    print_score_result(&result);
    Ok(())
}

fn run_distribution_command(dictionary: &DictionarySource) -> Result<()> {
    let result = letter_distribution(dictionary)
        .with_context(|| format!("Could not count letters in {dictionary}"))?;
    print_distribution_result(&result);
    Ok(())
}
