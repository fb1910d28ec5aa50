//! Word list loading utilities
//!
//! Reads flat dictionary files or converts the embedded constant.

use super::DictionaryError;
use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load words from a flat dictionary file
///
/// Words may be separated by commas, newlines or both. Tokens that are not
/// five ASCII letters are skipped with a warning.
///
/// # Errors
///
/// Returns `DictionaryError::ResourceNotFound` if the file does not exist and
/// `DictionaryError::Io` if it exists but cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words_alpha_five_letters.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DictionaryError::ResourceNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Read a named resource from a resources directory
///
/// # Errors
///
/// Same as [`load_from_file`]; a missing resource names the full path.
pub fn read_data_resource<P: AsRef<Path>>(
    resources_dir: P,
    resource_name: &str,
) -> Result<Vec<Word>, DictionaryError> {
    load_from_file(resources_dir.as_ref().join(resource_name))
}

/// Split flat dictionary text into words, keeping file order
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(accept_token)
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped with a warning, as in [`parse_words`].
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_slice;
/// use wordle_hints::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().copied().filter_map(accept_token).collect()
}

fn accept_token(token: &str) -> Option<Word> {
    match Word::new(token) {
        Ok(word) => Some(word),
        Err(e) => {
            warn!("skipping dictionary entry {token:?}: {e}");
            None
        }
    }
}
