//! Constraint matching: is this word still a possible answer?
//!
//! Rules are applied in order and short-circuit on the first failure:
//! 1. Greens: the letter sits at its confirmed position
//! 2. Yellows: the letter avoids its forbidden positions, and appears at some
//!    position that is neither forbidden nor already claimed by a green of the same letter
//! 3. Greys: the letter appears nowhere

use crate::core::{Constraints, Misplaced, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Check whether `word` is consistent with every clue in `constraints`
///
/// Stateless; each word is judged independently.
///
/// # Examples
/// ```
/// use wordle_hints::core::{Constraints, Misplaced, Placement, Word};
/// use wordle_hints::solver::is_candidate;
///
/// let constraints = Constraints::new(
///     vec![Placement::new(b'E', 4), Placement::new(b'L', 5)],
///     vec![Misplaced::new(b'E', vec![3])],
///     vec![b'A', b'R', b'O', b'S'],
/// );
///
/// assert!(is_candidate(&Word::new("bevel").unwrap(), &constraints));
/// assert!(!is_candidate(&Word::new("gymel").unwrap(), &constraints));
/// ```
#[must_use]
pub fn is_candidate(word: &Word, constraints: &Constraints) -> bool {
    matches_greens(word, constraints)
        && constraints
            .yellows
            .iter()
            .all(|yellow| matches_yellow(word, yellow, constraints))
        && matches_greys(word, constraints)
}

fn matches_greens(word: &Word, constraints: &Constraints) -> bool {
    constraints
        .greens
        .iter()
        .all(|green| word.char_at(green.index()) == green.letter)
}

fn matches_yellow(word: &Word, yellow: &Misplaced, constraints: &Constraints) -> bool {
    let forbidden: FxHashSet<usize> = yellow.forbidden_indices().collect();

    if forbidden
        .iter()
        .any(|&index| word.char_at(index) == yellow.letter)
    {
        return false;
    }

    // A green of the same letter must not double as this yellow's occurrence
    let claimed = constraints.green_indices_of(yellow.letter);
    let allowed = allowed_positions(&forbidden, &claimed);

    word.positions_of(yellow.letter)
        .iter()
        .any(|index| allowed.contains(index))
}

/// All word positions minus `forbidden` minus `claimed`
fn allowed_positions(forbidden: &FxHashSet<usize>, claimed: &FxHashSet<usize>) -> FxHashSet<usize> {
    let all: FxHashSet<usize> = (0..WORD_LENGTH).collect();
    let open: FxHashSet<usize> = all.difference(forbidden).copied().collect();
    open.difference(claimed).copied().collect()
}

fn matches_greys(word: &Word, constraints: &Constraints) -> bool {
    !constraints.greys.iter().any(|&grey| word.has_letter(grey))
}
