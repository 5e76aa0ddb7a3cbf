//! Display functions for query results

use crate::chain::WordChain;
use crate::core::Word;
use colored::Colorize;

/// Print every chain in a query result
///
/// The result set carries no ordering, so chains are sorted here for stable output.
pub fn print_chain_result(chains: &WordChain, verbose: bool) {
    if chains.is_empty() {
        println!("{}", "No chain found.".red());
        return;
    }

    let count = chains.path_count();
    let noun = if count == 1 { "chain" } else { "chains" };
    println!(
        "{}",
        format!("Found {count} shortest {noun}:").green().bold()
    );

    let mut paths: Vec<&[Word]> = chains.iter().collect();
    paths.sort_unstable();

    for path in paths {
        println!("  {}", format_path(path));
    }

    if verbose {
        if let Some(length) = chains.chain_length() {
            println!("\nWords per chain: {length} ({} steps)", length - 1);
        }
    }
}

/// Print the neighbour set of a word
pub fn print_neighbours(word: &str, neighbours: &[Word]) {
    if neighbours.is_empty() {
        println!("{}", format!("No neighbours of {word}.").red());
        return;
    }

    println!(
        "{}",
        format!("{} neighbours of {word}:", neighbours.len())
            .green()
            .bold()
    );
    for neighbour in neighbours {
        println!("  {neighbour}");
    }
}

fn format_path(path: &[Word]) -> String {
    path.iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" -> ")
}
