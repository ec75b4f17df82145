use wordle_constraints::commands::{SolveConfig, solve_word};
use wordle_constraints::core::{Word, WordleError, compute_feedback};
use wordle_constraints::solver::{
    ConstraintSpace, GuessSelector, Session, SessionState, choose_guess, score,
};
use wordle_constraints::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};

fn five() -> Vec<Word> {
    words_from_slice(&["crane", "slate", "trace", "grape", "place"])
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn trace_from_crane_end_to_end() {
    let words = five();
    let answer = word("trace");
    let crane = word("crane");

    let feedback = compute_feedback(&crane, &answer);
    assert_eq!(feedback.to_string(), "wccuc");

    let mut space = ConstraintSpace::new(&words);
    space.apply(&crane, feedback).unwrap();
    assert!(!space.contains(&word("slate")));
    assert!(!space.contains(&word("grape")));
    assert_eq!(space.candidates(), [&answer]);

    // One candidate left: it is returned without scoring
    assert_eq!(choose_guess(&words, &space), Some(&words[2]));
}

#[test]
fn session_reaches_the_same_answer_every_time() {
    let words = five();
    let answer = word("trace");

    let run = || {
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();
        let mut played = Vec::new();
        while session.state() == SessionState::AwaitingGuess {
            let guess = *session.suggest().unwrap().unwrap();
            played.push(guess);
            session.submit_guess(guess).unwrap();
            session
                .submit_feedback(compute_feedback(&guess, &answer))
                .unwrap();
        }
        assert_eq!(session.state(), SessionState::Solved);
        (played, session.solution())
    };

    let (played, solution) = run();
    assert_eq!(played, [word("crane")]);
    assert_eq!(solution, Some(answer));
    assert_eq!(run(), (played, solution));
}

#[test]
fn malformed_feedback_leaves_session_untouched() {
    let words = five();
    let mut session = Session::new(&words, &words, GuessSelector::new());
    session.start().unwrap();
    session.submit_guess(word("crane")).unwrap();

    let err = session.submit_feedback_str("ccccx").unwrap_err();
    assert!(matches!(err, WordleError::InvalidFeedbackFormat { .. }));
    assert_eq!(session.state(), SessionState::AwaitingFeedback);
    assert_eq!(session.space().len(), 5);
}

#[test]
fn solve_word_plays_final_candidate() {
    let words = five();
    let result = solve_word(
        &SolveConfig::new("trace".into()),
        &GuessSelector::new(),
        &words,
        &words,
    )
    .unwrap();

    assert!(result.success);
    assert_eq!(result.words(), [word("crane"), word("trace")]);
    assert!(result.guesses.last().unwrap().feedback.is_solved());
}

#[test]
fn embedded_lists_solve_within_six() {
    let pool = words_from_slice(ALLOWED);
    let answers = words_from_slice(ANSWERS);
    let selector = GuessSelector::new().with_parallel(true);
    let salet = word("salet");

    for answer in answers.iter().step_by(60) {
        let config = SolveConfig::new(answer.to_string()).with_start(salet);
        let result = solve_word(&config, &selector, &pool, &answers).unwrap();
        assert!(result.success, "{answer} not solved: {:?}", result.words());
        assert_eq!(result.guesses[0].word, salet);
    }
}

#[test]
fn scores_stay_within_bounds() {
    let answers = words_from_slice(&ANSWERS[..120]);
    let pool = words_from_slice(&ALLOWED[..120]);
    let space = ConstraintSpace::new(&answers);

    let n = space.len() as f64;
    for guess in &pool {
        let s = score(guess, &space);
        assert!(s <= n + 1e-9, "{guess} scored {s} over {n}");
        assert!(s >= 1.0 - 1e-9, "{guess} scored {s} under 1");
    }
}
