//! Letter-frequency scoring
//!
//! A word scores the global count of each of its letters. Repeats of a letter
//! within the same word are worth progressively less, since a second `E`
//! reveals less than a first.

use super::LetterDistribution;
use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Weight applied to the n-th occurrence (0-based) of a letter within one word
pub const OCCURRENCE_WEIGHTS: [f64; 5] = [1.0, 0.5, 0.25, 0.125, 0.0675];

/// Weight for a 0-based occurrence index, or `None` past the end of the table
#[inline]
#[must_use]
pub fn occurrence_weight(occurrence: usize) -> Option<f64> {
    OCCURRENCE_WEIGHTS.get(occurrence).copied()
}

/// Score a word against a letter distribution
///
/// Each term is rounded half-to-even on its own before summing.
///
/// # Panics
/// Panics if a letter occurs more often than the weight table allows, which a
/// five-letter `Word` cannot do.
///
/// # Examples
/// ```
/// use wordle_hints::core::Word;
/// use wordle_hints::solver::{LetterDistribution, score_word};
///
/// let words = vec![Word::new("aahed").unwrap(), Word::new("aalii").unwrap()];
/// let distribution = LetterDistribution::from_words(&words);
///
/// // A: 4 + round(4 * 0.5), H: 1, E: 1, D: 1
/// assert_eq!(score_word(&words[0], &distribution), 9);
/// ```
#[must_use]
pub fn score_word(word: &Word, distribution: &LetterDistribution) -> u32 {
    score_terms(word, distribution).iter().sum()
}

/// Per-position contributions to a word's score, left to right
///
/// # Panics
/// Same as [`score_word`].
#[must_use]
pub fn score_terms(word: &Word, distribution: &LetterDistribution) -> [u32; WORD_LENGTH] {
    let mut seen: FxHashMap<u8, usize> = FxHashMap::default();
    let letters = *word.chars();

    letters.map(|letter| {
        let occurrence = seen.entry(letter).or_insert(0);
        let weight = occurrence_weight(*occurrence)
            .expect("a five-letter word repeats a letter at most five times");
        *occurrence += 1;

        (f64::from(distribution.count(letter)) * weight).round_ties_even() as u32
    })
}
