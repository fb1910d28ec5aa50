//! Solutions command
//!
//! Turns raw clue strings into a ranked report.

use super::CommandError;
use crate::core::Constraints;
use crate::solver::{Report, Session};
use crate::wordlists::DictionarySource;
use log::debug;

/// Raw clue input plus the dictionary to search
#[derive(Debug, Clone, Default)]
pub struct SolutionsConfig {
    /// e.g. `A2,Y5`
    pub green: Option<String>,
    /// e.g. `A13,Y1234`
    pub yellow: Option<String>,
    /// e.g. `R,C`
    pub grey: Option<String>,
    pub dictionary: DictionarySource,
}

/// Validate the clues, load the dictionary and rank guesses
///
/// # Errors
///
/// Returns an error if:
/// - Any clue string is malformed
/// - The dictionary cannot be loaded
pub fn find_solutions(config: &SolutionsConfig) -> Result<Report, CommandError> {
    let constraints = Constraints::parse(
        config.green.as_deref(),
        config.yellow.as_deref(),
        config.grey.as_deref(),
    )?;
    debug!("parsed clues: {constraints:?}");

    let session = Session::load(constraints, &config.dictionary)?;
    Ok(session.solve())
}
