//! Wordle Hints
//!
//! Filters a dictionary by green/yellow/grey clues and ranks the survivors by
//! letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::{Constraints, Misplaced, Placement};
//! use wordle_hints::solver::Session;
//! use wordle_hints::wordlists::loader::words_from_slice;
//!
//! let clues = Constraints::new(
//!     vec![Placement::new(b'E', 4), Placement::new(b'L', 5)],
//!     vec![Misplaced::new(b'E', vec![3])],
//!     vec![b'A', b'R', b'O', b'S'],
//! );
//! let dictionary = words_from_slice(&["bevel", "gymel", "expel", "stand"]);
//!
//! let report = Session::new(clues, dictionary).solve();
//! assert_eq!(report.top.len(), 2);
//! ```

// Core domain types
pub mod core;

// Filtering and scoring
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
