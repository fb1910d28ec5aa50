//! Distribution command
//!
//! Reports how often each letter occurs across the dictionary.

use super::CommandError;
use crate::solver::LetterDistribution;
use crate::wordlists::DictionarySource;

/// Letter counts for a dictionary
#[derive(Debug)]
pub struct DistributionResult {
    pub total_words: usize,
    pub distribution: LetterDistribution,
}

/// Count letters across the selected dictionary
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn letter_distribution(dictionary: &DictionarySource) -> Result<DistributionResult, CommandError> {
    let words = dictionary.load()?;

    Ok(DistributionResult {
        total_words: words.len(),
        distribution: LetterDistribution::from_words(&words),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY_COUNT;

    #[test]
    fn bundled_dictionary_counts_every_letter() {
        let result = letter_distribution(&DictionarySource::Embedded).unwrap();

        assert_eq!(result.total_words, DICTIONARY_COUNT);
        assert_eq!(result.distribution.total(), (DICTIONARY_COUNT * 5) as u64);
        assert_eq!(result.distribution.iter().count(), 26);
    }

    #[test]
    fn missing_dictionary_is_an_error() {
        let source = DictionarySource::File("no/such/words.txt".into());
        let err = letter_distribution(&source).unwrap_err();
        assert!(matches!(err, CommandError::Dictionary(_)));
    }
}
