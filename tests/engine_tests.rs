use wordle_clue::core::{Clue, Code, Word, get_clue};
use wordle_clue::engine::{filter_history, get_groups, reduce_candidates};
use wordle_clue::error::ClueError;
use wordle_clue::session::{Mode, Session, SessionConfig, Submission};
use wordle_clue::wordlists::WordStore;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn clue(guess: &str, answer: &str) -> Clue {
    get_clue(&word(guess), &word(answer)).unwrap()
}

#[test]
fn test_crate_against_trace() {
    let result = clue("crate", "trace");
    assert_eq!(result.to_string(), "12212");

    let candidates: Vec<Word> = ["crate", "trace", "react", "cater"]
        .into_iter()
        .map(word)
        .collect();
    let left = reduce_candidates(&word("crate"), &result, &candidates).unwrap();
    assert_eq!(left, vec![word("trace")]);
}

#[test]
fn test_duplicate_letters_in_guess() {
    let result = clue("abcaa", "aabbc");
    assert_eq!(
        result.codes(),
        &[
            Code::Exact,
            Code::Partial,
            Code::Partial,
            Code::Partial,
            Code::NoMatch
        ]
    );
}

#[test]
fn test_duplicate_letters_speed_creep() {
    assert_eq!(clue("speed", "creep").to_string(), "01220");
}

#[test]
fn test_self_clue_is_full_match() {
    assert!(clue("sassy", "sassy").is_full_match());
    let store = WordStore::embedded();
    for w in store.dictionary(5).iter().take(300) {
        assert!(get_clue(w, w).unwrap().is_full_match(), "{w}");
    }
}

#[test]
fn test_mismatched_lengths() {
    assert!(matches!(
        get_clue(&word("book"), &word("crate")),
        Err(ClueError::LengthMismatch { .. })
    ));
}

#[test]
fn test_reduction_is_sound_and_idempotent() {
    let store = WordStore::embedded();
    let dictionary = store.dictionary(5);
    let guess = word("slate");

    for answer in dictionary.iter().step_by(97) {
        let result = get_clue(&guess, answer).unwrap();
        let left = reduce_candidates(&guess, &result, dictionary).unwrap();

        assert!(left.contains(answer), "{answer} dropped");
        for w in &left {
            assert_eq!(get_clue(&guess, w).unwrap(), result);
        }

        let again = reduce_candidates(&guess, &result, &left).unwrap();
        assert_eq!(again, left);
    }
}

#[test]
fn test_groups_partition_the_dictionary() {
    let store = WordStore::embedded();
    let dictionary = store.dictionary(5);
    let guess = word("crate");
    let groups = get_groups(&guess, dictionary).unwrap();

    assert_eq!(groups.total(), dictionary.len());

    let mut seen: Vec<&Word> = groups.iter().flat_map(|(_, members)| members).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), dictionary.len());

    for (result, members) in groups.iter() {
        let reduced = reduce_candidates(&guess, result, dictionary).unwrap();
        assert_eq!(reduced, members);
    }
}

#[test]
fn test_history_matches_stepwise_reduction() {
    let store = WordStore::embedded();
    let dictionary = store.dictionary(5);
    let answer = word("trace");
    let steps: Vec<(Word, Clue)> = ["slate", "crane"]
        .into_iter()
        .map(|g| {
            let g = word(g);
            let c = get_clue(&g, &answer).unwrap();
            (g, c)
        })
        .collect();

    let mut stepwise = dictionary.to_vec();
    for (g, c) in &steps {
        stepwise = reduce_candidates(g, c, &stepwise).unwrap();
    }
    let combined = filter_history(steps.iter().map(|(g, c)| (g, c)), dictionary).unwrap();

    assert_eq!(combined, stepwise);
    assert!(combined.contains(&answer));
}

#[test]
fn test_answer_session_round_trip() {
    let store = WordStore::embedded();
    let mut session =
        Session::with_answer(&store, SessionConfig::default(), word("trace")).unwrap();
    let total = session.candidates().len();

    session.set_input("crate").unwrap();
    let Submission::Recorded(turn) = session.submit().unwrap() else {
        panic!("crate should be recorded");
    };
    assert_eq!(turn.clue.to_string(), "12212");
    assert_eq!(turn.candidates_before, total);
    assert!(session.candidates().contains(&word("trace")));
    assert!(!session.is_finished());

    session.set_input("trace").unwrap();
    let Submission::Recorded(turn) = session.submit().unwrap() else {
        panic!("trace should be recorded");
    };
    assert!(turn.finished);
    assert!(session.is_won());
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_clue_session_round_trip() {
    let store = WordStore::embedded();
    let config = SessionConfig::default().with_mode(Mode::Clue);
    let mut session = Session::new(&store, config).unwrap();
    assert!(session.answer().is_none());

    session.set_input("crate").unwrap();
    let result = session
        .submit_clue(Clue::parse("YGGYG").unwrap())
        .unwrap();
    assert!(matches!(result, Submission::Recorded(_)));
    assert!(session.candidates().contains(&word("trace")));

    session.set_input("trace").unwrap();
    for position in 0..5 {
        session.toggle_tile(position).unwrap();
        session.toggle_tile(position).unwrap();
    }
    session.submit().unwrap();

    assert!(session.is_won());
    assert_eq!(session.answer(), Some(&word("trace")));
}
