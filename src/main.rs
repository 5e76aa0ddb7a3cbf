//! Word Ladder - CLI
//!
//! Builds one-letter-difference graphs from a word list file and prints all
//! shortest chains between two words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_ladder::{
    chain::WordChainIndex,
    core::Word,
    output::{print_chain_result, print_neighbours},
    wordlists::loader::read_word_list,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find all shortest word ladders between two words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the word list file, one word per line
    #[arg(short = 'w', long)]
    wordlist: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all shortest chains between two words
    Chains {
        /// The word the chains start from
        start: String,

        /// The word the chains end at
        end: String,

        /// Show chain length details
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the words one letter away from a word
    Neighbours {
        /// Word to look up
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw_words = read_word_list(&cli.wordlist)
        .with_context(|| format!("Failed to read word list {}", cli.wordlist.display()))?;
    let index = WordChainIndex::new(raw_words).context("Invalid word list")?;

    match cli.command {
        Commands::Chains {
            start,
            end,
            verbose,
        } => run_chains_command(&index, &start, &end, verbose),
        Commands::Neighbours { word } => run_neighbours_command(&index, &word),
    }

    Ok(())
}

fn run_chains_command(index: &WordChainIndex, start: &str, end: &str, verbose: bool) {
    let chains = index.query(start, end);
    print_chain_result(&chains, verbose);
}

fn run_neighbours_command(index: &WordChainIndex, word: &str) {
    let mut neighbours: Vec<Word> = index.neighbours(word).into_iter().collect();
    neighbours.sort_unstable();
    print_neighbours(word, &neighbours);
}
