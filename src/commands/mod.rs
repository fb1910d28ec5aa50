//! Command implementations

pub mod distribution;
pub mod score;
pub mod solutions;

pub use distribution::{DistributionResult, letter_distribution};
pub use score::{ScoreResult, score_guess};
pub use solutions::{SolutionsConfig, find_solutions};

use crate::core::{ConstraintError, WordError};
use crate::wordlists::DictionaryError;
use thiserror::Error;

/// Anything a command can fail with
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("Invalid word: {0}")]
    Word(#[from] WordError),
}
