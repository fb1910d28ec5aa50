//! Filtering and ranking
//!
//! Letter distribution, constraint matching, scoring, and the session that
//! ties them together.

mod distribution;
mod matcher;
mod scorer;
mod session;

pub use distribution::LetterDistribution;
pub use matcher::is_candidate;
pub use scorer::{OCCURRENCE_WEIGHTS, occurrence_weight, score_terms, score_word};
pub use session::{Report, ScoredWord, Session, TOP_N};
