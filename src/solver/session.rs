//! A single solve: filter, score and rank one dictionary against one clue set

use super::{LetterDistribution, is_candidate, score_word};
use crate::core::{Constraints, Word};
use crate::wordlists::{DictionaryError, DictionarySource};
use log::{debug, info};
use rayon::prelude::*;

/// How many entries of each ranked list are reported
pub const TOP_N: usize = 10;

/// A word paired with its letter-frequency score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: u32,
}

/// The outcome of a solve, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub constraints: Constraints,
    /// Best-scoring words that fit every clue
    pub top: Vec<ScoredWord>,
    /// As `top`, restricted to words without repeated letters
    pub non_repeating: Vec<ScoredWord>,
    /// Best-scoring words that use none of the clued letters, fitting or not
    pub new_letter: Vec<ScoredWord>,
}

/// Owns the clue set, the dictionary and its letter distribution for one run
///
/// The distribution is always taken over the full dictionary, so scores
/// reflect letter frequency in the language rather than among the candidates.
pub struct Session {
    constraints: Constraints,
    dictionary: Vec<Word>,
    distribution: LetterDistribution,
}

impl Session {
    /// Create a session over an already loaded dictionary
    #[must_use]
    pub fn new(constraints: Constraints, dictionary: Vec<Word>) -> Self {
        let distribution = LetterDistribution::from_words(&dictionary);
        Self {
            constraints,
            dictionary,
            distribution,
        }
    }

    /// Load the dictionary from `source` and create a session over it
    ///
    /// # Errors
    ///
    /// Propagates the `DictionaryError` if the dictionary cannot be loaded.
    pub fn load(constraints: Constraints, source: &DictionarySource) -> Result<Self, DictionaryError> {
        let dictionary = source.load()?;
        info!("loaded {} words from {source}", dictionary.len());
        Ok(Self::new(constraints, dictionary))
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub const fn distribution(&self) -> &LetterDistribution {
        &self.distribution
    }

    /// Dictionary words consistent with every clue, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.dictionary
            .par_iter()
            .filter(|word| is_candidate(word, &self.constraints))
            .collect()
    }

    /// Candidates scored and sorted best first; ties keep dictionary order
    #[must_use]
    pub fn ranked(&self) -> Vec<ScoredWord> {
        let candidates = self.candidates();
        debug!("{} of {} words fit the clues", candidates.len(), self.dictionary.len());
        self.score_and_sort(candidates)
    }

    /// Entries of `ranked` whose letters are all distinct, order preserved
    #[must_use]
    pub fn non_repeating(ranked: &[ScoredWord]) -> Vec<ScoredWord> {
        ranked
            .iter()
            .filter(|scored| scored.word.has_distinct_letters())
            .cloned()
            .collect()
    }

    /// Words sharing no letter with any clue, scored and sorted best first
    ///
    /// Drawn from the whole dictionary, not only the candidates: these guesses
    /// are for probing unseen letters.
    #[must_use]
    pub fn new_letter_words(&self) -> Vec<ScoredWord> {
        let mentioned = self.constraints.mentioned_letters();
        let fresh: Vec<&Word> = self
            .dictionary
            .par_iter()
            .filter(|word| !word.chars().iter().any(|ch| mentioned.contains(ch)))
            .collect();
        debug!("{} words avoid every clued letter", fresh.len());
        self.score_and_sort(fresh)
    }

    /// Run the whole pipeline and keep the top entries of each list
    #[must_use]
    pub fn solve(&self) -> Report {
        let ranked = self.ranked();
        let non_repeating = Self::non_repeating(&ranked);
        let new_letter = self.new_letter_words();

        Report {
            constraints: self.constraints.clone(),
            top: top_n(ranked),
            non_repeating: top_n(non_repeating),
            new_letter: top_n(new_letter),
        }
    }

    /// Score every word against the global distribution
    ///
    /// `sort_by` is stable, so equal scores keep their input order.
    fn score_and_sort(&self, words: Vec<&Word>) -> Vec<ScoredWord> {
        let mut scored: Vec<ScoredWord> = words
            .into_par_iter()
            .map(|word| ScoredWord {
                word: word.clone(),
                score: score_word(word, &self.distribution),
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

fn top_n(mut words: Vec<ScoredWord>) -> Vec<ScoredWord> {
    words.truncate(TOP_N);
    words
}
