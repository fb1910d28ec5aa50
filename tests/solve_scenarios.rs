use wordle_hints::core::{Constraints, Word};
use wordle_hints::solver::{LetterDistribution, Session, is_candidate, score_word};
use wordle_hints::wordlists::{DictionarySource, FULL_DICTIONARY_RESOURCE};
use wordle_hints::wordlists::loader::load_from_file;

fn sample_session(clues: Constraints) -> Session {
    Session::load(clues, &DictionarySource::Embedded).unwrap()
}

#[test]
fn test_bevel_scenario_end_to_end() {
    let clues = Constraints::parse(Some("E4,L5"), Some("E3"), Some("A,R,O,S,I,N,T,C,U,D,W,H"))
        .unwrap();
    let session = sample_session(clues);

    let candidates: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
    assert_eq!(candidates, vec!["BEVEL", "BEZEL", "EXPEL", "LEVEL"]);

    let report = session.solve();
    let top: Vec<&str> = report.top.iter().map(|s| s.word.text()).collect();
    assert_eq!(top, vec!["LEVEL", "BEVEL", "EXPEL", "BEZEL"]);
    assert!(report.non_repeating.is_empty());
}

#[test]
fn test_accepted_words_satisfy_every_clue() {
    let clues = Constraints::parse(Some("A3,D5"), Some("Y45"), Some("Z,N,C,H")).unwrap();
    let session = sample_session(clues.clone());

    for word in session.candidates() {
        assert_eq!(word.char_at(2), b'A');
        assert_eq!(word.char_at(4), b'D');
        assert_ne!(word.char_at(3), b'Y');
        assert!(word.positions_of(b'Y').iter().any(|&i| i < 3));
        for grey in [b'Z', b'N', b'C', b'H'] {
            assert!(!word.has_letter(grey));
        }
    }
    assert!(is_candidate(&Word::new("yeard").unwrap(), &clues));
}

#[test]
fn test_new_letter_list_avoids_clued_letters() {
    let clues = Constraints::parse(Some("E4"), Some("R12"), Some("A,S,T")).unwrap();
    let report = sample_session(clues.clone()).solve();
    let mentioned = clues.mentioned_letters();

    assert!(!report.new_letter.is_empty());
    for entry in &report.new_letter {
        assert!(entry.word.chars().iter().all(|c| !mentioned.contains(c)));
    }
    let scores: Vec<u32> = report.new_letter.iter().map(|s| s.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_distribution_sum_matches_letters() {
    let words = DictionarySource::Embedded.load().unwrap();
    let distribution = LetterDistribution::from_words(&words);
    assert_eq!(distribution.total(), (words.len() * 5) as u64);
}

/// Golden baseline over the full words_alpha five-letter list; only a sample is bundled.
/// Point `WORDLE_FULL_DICTIONARY` at that file and run with `--ignored`.
#[test]
#[ignore = "requires the full words_alpha five-letter dictionary"]
fn test_full_dictionary_golden_distribution() {
    let path = std::env::var("WORDLE_FULL_DICTIONARY")
        .unwrap_or_else(|_| panic!("WORDLE_FULL_DICTIONARY must name {FULL_DICTIONARY_RESOURCE}"));
    let words = load_from_file(&path).unwrap();
    let distribution = LetterDistribution::from_words(&words);

    let expected: [u32; 26] = [
        8393, 2090, 2744, 2813, 7802, 1238, 1971, 2284, 5067, 376, 1743, 4247, 2494, 4044, 5219,
        2299, 139, 5144, 6537, 4189, 3361, 878, 1171, 361, 2522, 474,
    ];
    assert_eq!(distribution, LetterDistribution::from_counts(expected));
    assert_eq!(score_word(&Word::new("abama").unwrap(), &distribution), 19271);

    assert_eq!(words.len(), 15_920);
    assert_eq!(load_from_file(&path).unwrap(), words);
}
