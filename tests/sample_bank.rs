use std::collections::BTreeSet;

use quiz_engine::{OptionClass, Outcome, QuizEngine, load_questions_from_json};

fn sample_engine() -> QuizEngine {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/questions.json");
    QuizEngine::new(load_questions_from_json(path).unwrap())
}

/// Answers each question with its key, or with the first option when `perfect` is false.
fn play(engine: &mut QuizEngine, perfect: bool) {
    while !engine.is_terminal() {
        let question = engine.current_question().unwrap().clone();
        let picks: Vec<usize> = if perfect {
            (0..question.option_count())
                .filter(|&i| question.correct_answer.contains(i))
                .collect()
        } else {
            vec![0]
        };

        for index in picks {
            engine.select_option(index);
        }
        engine.submit_multiple();
        assert!(engine.is_revealed());

        engine.advance();
    }
}

#[test]
fn sample_bank_has_both_modes() {
    let engine = sample_engine();
    let questions = engine.questions();

    assert!(questions.iter().any(|q| q.is_multiple_choice()));
    assert!(questions.iter().any(|q| !q.is_multiple_choice()));
    assert!(questions.iter().all(|q| !q.explanation.is_empty()));
}

#[test]
fn perfect_run_scores_every_question() {
    let mut engine = sample_engine();

    play(&mut engine, true);

    assert_eq!(engine.score(), engine.total_questions());
    assert!(engine.outcomes().iter().all(|o| *o == Outcome::Correct));
}

#[test]
fn first_option_run_then_reset() {
    let mut engine = sample_engine();

    play(&mut engine, false);
    let expected = engine
        .questions()
        .iter()
        .filter(|q| q.correct_answer.matches(&BTreeSet::from([0])))
        .count();
    assert_eq!(engine.score(), expected);
    assert_eq!(engine.outcomes().len(), engine.total_questions());

    engine.reset();
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.option_classification(0), OptionClass::Neutral);
}
