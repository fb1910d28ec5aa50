//! Clue state for a single Wordle turn
//!
//! Positions are 1-indexed here, matching how players count squares. They are
//! converted to 0-indexed word offsets only when a constraint is applied.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A letter confirmed at a position (a green square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub letter: u8,
    /// 1..=5
    pub position: u8,
}

impl Placement {
    #[must_use]
    pub const fn new(letter: u8, position: u8) -> Self {
        Self { letter, position }
    }

    /// 0-based offset into a word
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.position as usize - 1
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.letter as char, self.position)
    }
}

/// A letter in the word but known not to sit at any of `forbidden` (a yellow square)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Misplaced {
    pub letter: u8,
    /// Non-empty, each in 1..=5
    pub forbidden: Vec<u8>,
}

impl Misplaced {
    #[must_use]
    pub const fn new(letter: u8, forbidden: Vec<u8>) -> Self {
        Self { letter, forbidden }
    }

    /// 0-based offsets the letter cannot occupy
    pub fn forbidden_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.forbidden.iter().map(|&p| p as usize - 1)
    }
}

impl fmt::Display for Misplaced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.forbidden.iter().map(ToString::to_string).collect();
        write!(f, "{} != [{}]", self.letter as char, positions.join(", "))
    }
}

/// Everything known about the hidden word
///
/// The collections are taken as given. A letter that is both grey and
/// green/yellow makes the set unsatisfiable; that is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub greens: Vec<Placement>,
    pub yellows: Vec<Misplaced>,
    pub greys: Vec<u8>,
}

impl Constraints {
    #[must_use]
    pub const fn new(greens: Vec<Placement>, yellows: Vec<Misplaced>, greys: Vec<u8>) -> Self {
        Self {
            greens,
            yellows,
            greys,
        }
    }

    /// Parse the three raw clue strings accepted on the command line
    ///
    /// # Errors
    /// Returns the first `ConstraintError` raised by any of the three parsers.
    pub fn parse(
        greens: Option<&str>,
        yellows: Option<&str>,
        greys: Option<&str>,
    ) -> Result<Self, ConstraintError> {
        Ok(Self::new(
            parse_greens(greens)?,
            parse_yellows(yellows)?,
            parse_greys(greys)?,
        ))
    }

    /// True when no clue of any colour is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.is_empty() && self.yellows.is_empty() && self.greys.is_empty()
    }

    /// Every letter named by any green, yellow or grey clue
    #[must_use]
    pub fn mentioned_letters(&self) -> FxHashSet<u8> {
        self.greens
            .iter()
            .map(|g| g.letter)
            .chain(self.yellows.iter().map(|y| y.letter))
            .chain(self.greys.iter().copied())
            .collect()
    }

    /// 0-based positions where `letter` is already fixed by a green clue
    #[must_use]
    pub fn green_indices_of(&self, letter: u8) -> FxHashSet<usize> {
        self.greens
            .iter()
            .filter(|g| g.letter == letter)
            .map(|g| g.index())
            .collect()
    }
}

/// Rejected raw clue input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error(
        "Each input for green letters must be a letter followed by a number from 1-5. Input {0} is invalid."
    )]
    Green(String),
    #[error(
        "Each input for yellow letters must be a letter followed by one to four numbers from 1-5. Input {0} is invalid."
    )]
    Yellow(String),
    #[error("Each input for grey letters must be a single letter. Input {0} is invalid.")]
    Grey(String),
}

/// Split a comma-separated clue string; `None` and blank input mean "no clues"
fn tokens(input: Option<&str>) -> impl Iterator<Item = &str> {
    input
        .filter(|s| !s.is_empty())
        .into_iter()
        .flat_map(|s| s.split(','))
}

fn letter(ch: u8) -> Option<u8> {
    ch.is_ascii_alphabetic().then_some(ch.to_ascii_uppercase())
}

fn position(ch: u8) -> Option<u8> {
    matches!(ch, b'1'..=b'5').then_some(ch - b'0')
}

/// Parse green clues such as `A2,Y5`
///
/// # Errors
/// Returns `ConstraintError::Green` naming the first malformed token.
///
/// # Examples
/// ```
/// use wordle_hints::core::{Placement, parse_greens};
///
/// let greens = parse_greens(Some("B4,i2")).unwrap();
/// assert_eq!(greens, vec![Placement::new(b'B', 4), Placement::new(b'I', 2)]);
/// ```
pub fn parse_greens(input: Option<&str>) -> Result<Vec<Placement>, ConstraintError> {
    tokens(input)
        .map(|token| {
            let invalid = || ConstraintError::Green(token.to_string());
            match token.as_bytes() {
                &[l, p] => Ok(Placement::new(
                    letter(l).ok_or_else(invalid)?,
                    position(p).ok_or_else(invalid)?,
                )),
                _ => Err(invalid()),
            }
        })
        .collect()
}

/// Parse yellow clues such as `A13,Y1234`
///
/// # Errors
/// Returns `ConstraintError::Yellow` naming the first malformed token.
pub fn parse_yellows(input: Option<&str>) -> Result<Vec<Misplaced>, ConstraintError> {
    tokens(input)
        .map(|token| {
            let invalid = || ConstraintError::Yellow(token.to_string());
            let bytes = token.as_bytes();
            if !(2..=5).contains(&bytes.len()) {
                return Err(invalid());
            }

            let l = letter(bytes[0]).ok_or_else(invalid)?;
            let forbidden = bytes[1..]
                .iter()
                .map(|&p| position(p).ok_or_else(invalid))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Misplaced::new(l, forbidden))
        })
        .collect()
}

/// Parse grey clues such as `R,C`
///
/// # Errors
/// Returns `ConstraintError::Grey` naming the first malformed token.
pub fn parse_greys(input: Option<&str>) -> Result<Vec<u8>, ConstraintError> {
    tokens(input)
        .map(|token| match token.as_bytes() {
            &[l] => letter(l).ok_or_else(|| ConstraintError::Grey(token.to_string())),
            _ => Err(ConstraintError::Grey(token.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_greens_valid() {
        assert!(parse_greens(None).unwrap().is_empty());
        assert_eq!(parse_greens(Some("a1")).unwrap(), vec![Placement::new(b'A', 1)]);
        assert_eq!(
            parse_greens(Some("G2,H4,S1,d3")).unwrap(),
            vec![
                Placement::new(b'G', 2),
                Placement::new(b'H', 4),
                Placement::new(b'S', 1),
                Placement::new(b'D', 3),
            ]
        );
    }

    #[test]
    fn parse_greens_rejects_malformed_tokens() {
        for token in ["a12", "4V", "AD", "r7", "D0", "t^"] {
            assert_eq!(
                parse_greens(Some(token)),
                Err(ConstraintError::Green(token.to_string())),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn parse_greens_error_message_names_token() {
        let err = parse_greens(Some("A2,a12")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Each input for green letters must be a letter followed by a number from 1-5. Input a12 is invalid."
        );
    }

    #[test]
    fn parse_yellows_valid() {
        assert!(parse_yellows(Some("")).unwrap().is_empty());
        assert_eq!(
            parse_yellows(Some("s4")).unwrap(),
            vec![Misplaced::new(b'S', vec![4])]
        );
        assert_eq!(
            parse_yellows(Some("H2351")).unwrap(),
            vec![Misplaced::new(b'H', vec![2, 3, 5, 1])]
        );
        assert_eq!(
            parse_yellows(Some("n13,s5,g412")).unwrap(),
            vec![
                Misplaced::new(b'N', vec![1, 3]),
                Misplaced::new(b'S', vec![5]),
                Misplaced::new(b'G', vec![4, 1, 2]),
            ]
        );
    }

    #[test]
    fn parse_yellows_rejects_malformed_tokens() {
        for token in ["H", "D12345", "4k", "d0", "s6", "j!", "v3*4", "Y3N4"] {
            assert_eq!(
                parse_yellows(Some(token)),
                Err(ConstraintError::Yellow(token.to_string())),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn parse_greys_valid_and_invalid() {
        assert_eq!(parse_greys(Some("v,e")).unwrap(), vec![b'V', b'E']);
        assert_eq!(parse_greys(Some("ge")), Err(ConstraintError::Grey("ge".into())));
        assert_eq!(parse_greys(Some("4")), Err(ConstraintError::Grey("4".into())));
        assert_eq!(
            parse_greys(Some("4")).unwrap_err().to_string(),
            "Each input for grey letters must be a single letter. Input 4 is invalid."
        );
    }

    #[test]
    fn parse_all_three() {
        let constraints = Constraints::parse(Some("a4"), Some("b123"), Some("g,f,q")).unwrap();
        assert_eq!(constraints.greens, vec![Placement::new(b'A', 4)]);
        assert_eq!(constraints.yellows, vec![Misplaced::new(b'B', vec![1, 2, 3])]);
        assert_eq!(constraints.greys, vec![b'G', b'F', b'Q']);
        assert!(!constraints.is_empty());
        assert!(Constraints::parse(None, None, None).unwrap().is_empty());
    }

    #[test]
    fn mentioned_letters_covers_every_colour() {
        let constraints = Constraints::new(
            vec![Placement::new(b'E', 4), Placement::new(b'L', 5)],
            vec![Misplaced::new(b'E', vec![3])],
            vec![b'A', b'R'],
        );
        let mentioned = constraints.mentioned_letters();
        assert_eq!(mentioned.len(), 4);
        for letter in [b'E', b'L', b'A', b'R'] {
            assert!(mentioned.contains(&letter));
        }
    }

    #[test]
    fn green_indices_are_zero_based() {
        let constraints = Constraints::new(
            vec![Placement::new(b'E', 2), Placement::new(b'E', 4), Placement::new(b'L', 5)],
            vec![],
            vec![],
        );
        let indices = constraints.green_indices_of(b'E');
        assert_eq!(indices.len(), 2);
        assert!(indices.contains(&1) && indices.contains(&3));
        assert!(constraints.green_indices_of(b'Z').is_empty());
    }

    #[test]
    fn display_matches_report_format() {
        assert_eq!(Placement::new(b'B', 1).to_string(), "B = 1");
        assert_eq!(Misplaced::new(b'D', vec![2, 5]).to_string(), "D != [2, 5]");
    }

    #[test]
    fn single_character_helpers() {
        assert_eq!(letter(b'q'), Some(b'Q'));
        assert_eq!(letter(b'Q'), Some(b'Q'));
        assert_eq!(letter(b'3'), None);
        assert_eq!(position(b'1'), Some(1));
        assert_eq!(position(b'5'), Some(5));
        assert_eq!(position(b'0'), None);
        assert_eq!(position(b'6'), None);
    }
}
