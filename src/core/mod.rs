//! Core domain types for the clue solver
//!
//! Words and clue sets. Everything here is pure data plus validation.

mod constraints;
mod word;

pub use constraints::{
    ConstraintError, Constraints, Misplaced, Placement, parse_greens, parse_greys, parse_yellows,
};
pub use word::{WORD_LENGTH, Word, WordError};
