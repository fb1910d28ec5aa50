//! Dictionaries for the clue solver
//!
//! Provides a bundled sample dictionary compiled into the binary, plus loading
//! from a flat file on disk. The sample is a subset of the full words_alpha
//! five-letter list, so scores computed against it differ from scores over the
//! full list; pass the full file as a `File` source to reproduce those.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the bundled sample under `data/`
pub const SAMPLE_RESOURCE: &str = "sample_five_letters.txt";

/// File name of the full five-letter dictionary, supplied by the user
pub const FULL_DICTIONARY_RESOURCE: &str = "words_alpha_five_letters.txt";

/// Failure to obtain a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Data resource '{}' not found.", .0.display())]
    ResourceNotFound(PathBuf),
    #[error("Failed to read data resource '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// The sample word file bundled at build time
    #[default]
    Embedded,
    /// A flat word file on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Pick a file source when a path is given, the embedded list otherwise
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }

    /// Load the words in source order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if a file source is missing or unreadable.
    /// The embedded source never fails.
    pub fn load(&self) -> Result<Vec<Word>, DictionaryError> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(DICTIONARY)),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "bundled sample {SAMPLE_RESOURCE}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
