//! Letter frequency across a word list
//!
//! Counts every occurrence, so a letter appearing twice in one word counts twice.

use crate::core::Word;

/// Occurrence count for each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterDistribution {
    counts: [u32; 26],
}

impl LetterDistribution {
    /// Count letters across `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    /// use wordle_hints::solver::LetterDistribution;
    ///
    /// let words = vec![Word::new("aahed").unwrap(), Word::new("aargh").unwrap()];
    /// let distribution = LetterDistribution::from_words(&words);
    /// assert_eq!(distribution.count(b'A'), 4);
    /// assert_eq!(distribution.count(b'Z'), 0);
    /// ```
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts = [0u32; 26];
        for word in words {
            for &ch in word.chars() {
                counts[usize::from(ch - b'A')] += 1;
            }
        }
        Self { counts }
    }

    /// Build from raw counts indexed A=0 .. Z=25
    #[must_use]
    pub const fn from_counts(counts: [u32; 26]) -> Self {
        Self { counts }
    }

    /// Count for an uppercase letter
    ///
    /// # Panics
    /// Panics if `letter` is not in A-Z
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u32 {
        self.counts[(letter - b'A') as usize]
    }

    /// All 26 `(letter, count)` pairs in alphabetical order, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        (b'A'..=b'Z').zip(self.counts.iter().copied()).map(|(l, c)| (l as char, c))
    }

    /// Sum of all counts, equal to the number of letters counted
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn four_words() -> Vec<Word> {
        words_from_slice(&["aahed", "aalii", "aargh", "aaron"])
    }

    #[test]
    fn counts_match_reference_subset() {
        let distribution = LetterDistribution::from_words(&four_words());

        let expected = [
            ('A', 8),
            ('D', 1),
            ('E', 1),
            ('G', 1),
            ('H', 2),
            ('I', 2),
            ('L', 1),
            ('N', 1),
            ('O', 1),
            ('R', 2),
        ];
        for (letter, count) in distribution.iter() {
            let want = expected
                .iter()
                .find(|(l, _)| *l == letter)
                .map_or(0, |&(_, c)| c);
            assert_eq!(count, want, "count for {letter}");
        }
    }

    #[test]
    fn every_letter_is_present() {
        let distribution = LetterDistribution::from_words(&four_words());
        let letters: String = distribution.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn total_equals_letter_count() {
        let words = four_words();
        let distribution = LetterDistribution::from_words(&words);
        assert_eq!(distribution.total(), (words.len() * 5) as u64);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let distribution = LetterDistribution::from_words(&Vec::<Word>::new());
        assert_eq!(distribution.total(), 0);
        assert_eq!(distribution.iter().count(), 26);
        assert!(distribution.iter().all(|(_, c)| c == 0));
    }
}
