//! Score command
//!
//! Breaks down the letter-frequency score of a single guess.

use super::CommandError;
use crate::core::Word;
use crate::solver::{LetterDistribution, score_terms};
use crate::wordlists::DictionarySource;

/// Result of scoring a word
#[derive(Debug)]
pub struct ScoreResult {
    pub word: Word,
    pub score: u32,
    /// `(letter, contribution)` left to right
    pub terms: Vec<(char, u32)>,
    pub dictionary_size: usize,
}

/// Score `word` against the letter distribution of `dictionary`
///
/// The word need not be in the dictionary.
///
/// # Errors
///
/// Returns an error if:
/// - The word is not five ASCII letters
/// - The dictionary cannot be loaded
pub fn score_guess(word: &str, dictionary: &DictionarySource) -> Result<ScoreResult, CommandError> {
    let word = Word::new(word)?;
    let words = dictionary.load()?;
    let distribution = LetterDistribution::from_words(&words);

    let contributions = score_terms(&word, &distribution);
    let terms = word
        .chars()
        .iter()
        .zip(contributions)
        .map(|(&letter, points)| (letter as char, points))
        .collect();

    Ok(ScoreResult {
        score: contributions.iter().sum(),
        word,
        terms,
        dictionary_size: words.len(),
    })
}
