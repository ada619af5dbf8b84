//! Word list and frequency table loading
//!
//! Runtime I/O for custom dictionaries and corpus frequency tables. The rest
//! of the engine consumes the resulting values and never touches the disk.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Invalid entries (wrong length, non-letters) are skipped rather than
/// failing the whole load.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Load a frequency table: `word<whitespace>count` per line
///
/// Malformed lines are skipped. Counts may be any non-negative number;
/// the prior squashes them before use, so the scale does not matter.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> io::Result<FxHashMap<String, f64>> {
    let content = fs::read_to_string(path)?;

    let mut table = FxHashMap::default();
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let (Some(word), Some(count)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(word) = Word::new(word) else { continue };
        let Ok(count) = count.parse::<f64>() else {
            continue;
        };
        if count >= 0.0 {
            table.insert(word.text().to_string(), count);
        }
    }
    Ok(table)
}

/// Convert an embedded string slice to validated words
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
