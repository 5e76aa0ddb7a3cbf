//! Word list loading utilities

use std::fs;
use std::io;
use std::path::Path;

/// Read a word list from a file, one word per line
///
/// Lines are trimmed and blank lines dropped; everything else is returned as-is,
/// in file order, for the core to validate.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::read_word_list;
///
/// let words = read_word_list("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_word_list<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}
