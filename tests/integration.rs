// Integration tests (native) for the `canvas-quiz` crate.
// These drive the quiz state machine the way the browser host does, without
// touching wasm-specific functionality.

use canvas_quiz::view::{Bounds, Screen};
use canvas_quiz::{Effect, Quiz, QuizConfig, QuizError, QuizEvent, TimerToken};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn new_quiz(seed: u64) -> Quiz<StdRng> {
    Quiz::new(QuizConfig::default(), StdRng::seed_from_u64(seed)).unwrap()
}

fn tap(quiz: &mut Quiz<StdRng>, b: Bounds) -> Vec<Effect> {
    quiz.dispatch(QuizEvent::Pointer {
        x: b.x + b.w / 2.0,
        y: b.y + b.h / 2.0,
    })
    .unwrap()
}

fn start(quiz: &mut Quiz<StdRng>) {
    let b = quiz.start_bounds().expect("title screen");
    tap(quiz, b);
}

fn pick(quiz: &mut Quiz<StdRng>, correct: bool) -> Vec<Effect> {
    let view = quiz.question_view().expect("question screen");
    let answer = view.session.current().unwrap().answer.clone();
    let b = view
        .options
        .controls()
        .iter()
        .find(|c| (c.text == answer) == correct)
        .unwrap()
        .bounds;
    tap(quiz, b)
}

/// Picks the right answer and lets the feedback delay run out.
fn answer_correctly(quiz: &mut Quiz<StdRng>) {
    let effects = pick(quiz, true);
    let token = match effects.as_slice() {
        [Effect::Schedule { token, delay_ms }] => {
            assert_eq!(*delay_ms, 1000);
            *token
        }
        other => panic!("expected one scheduled delay, got {:?}", other),
    };
    quiz.dispatch(QuizEvent::TimerElapsed(token)).unwrap();
}

#[test]
fn five_question_playthrough_returns_to_title() {
    let mut quiz = new_quiz(2024);
    start(&mut quiz);
    assert_eq!(quiz.current_index(), Some(0));

    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), Some(1));

    let q2 = quiz.current_question().unwrap().prompt.clone();
    assert!(pick(&mut quiz, false).is_empty());
    assert!(quiz.question_view().unwrap().notice.is_some());
    assert_eq!(quiz.current_index(), Some(1));
    assert_eq!(quiz.current_question().unwrap().prompt, q2);

    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), Some(2));
    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), Some(3));
    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), Some(4));
    assert!(quiz.question_view().unwrap().session.is_finished());

    answer_correctly(&mut quiz);
    assert!(matches!(quiz.screen(), Screen::Title(_)));
}

#[test]
fn every_question_is_shown_exactly_once() {
    let mut quiz = new_quiz(7);
    start(&mut quiz);
    let mut shown = Vec::new();
    while let Some(record) = quiz.current_question() {
        shown.push(record.prompt.clone());
        answer_correctly(&mut quiz);
    }
    let mut expected: Vec<String> = quiz
        .bank()
        .records()
        .iter()
        .map(|r| r.prompt.clone())
        .collect();
    shown.sort();
    expected.sort();
    assert_eq!(shown, expected);
}

#[test]
fn wrong_answers_never_advance() {
    let mut quiz = new_quiz(3);
    start(&mut quiz);
    for _ in 0..10 {
        assert!(pick(&mut quiz, false).is_empty());
        let view = quiz.question_view().unwrap();
        assert_eq!(view.session.current_index(), 0);
        assert!(view.pending.is_none());
    }
    // still answerable after repeated misses
    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), Some(1));
}

#[test]
fn restarting_from_title_draws_new_session() {
    let mut quiz = new_quiz(11);
    start(&mut quiz);
    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), Some(1));

    let exit = quiz.question_view().unwrap().exit_bounds();
    assert!(tap(&mut quiz, exit).is_empty());
    assert!(matches!(quiz.screen(), Screen::Title(_)));

    start(&mut quiz);
    assert_eq!(quiz.current_index(), Some(0));
}

#[test]
fn exit_during_feedback_cancels_the_delay() {
    let mut quiz = new_quiz(5);
    start(&mut quiz);
    let token = match pick(&mut quiz, true).as_slice() {
        [Effect::Schedule { token, .. }] => *token,
        other => panic!("unexpected effects {:?}", other),
    };
    let exit = quiz.question_view().unwrap().exit_bounds();
    assert_eq!(tap(&mut quiz, exit), vec![Effect::Cancel(token)]);

    // start again, then let the stale timer fire: the new view is untouched
    start(&mut quiz);
    quiz.dispatch(QuizEvent::TimerElapsed(token)).unwrap();
    assert_eq!(quiz.current_index(), Some(0));
    assert!(quiz.question_view().unwrap().pending.is_none());
}

#[test]
fn tokens_are_unique_across_questions() {
    let mut quiz = new_quiz(9);
    start(&mut quiz);
    let mut tokens: Vec<TimerToken> = Vec::new();
    for _ in 0..3 {
        if let [Effect::Schedule { token, .. }] = pick(&mut quiz, true).as_slice() {
            tokens.push(*token);
            quiz.dispatch(QuizEvent::TimerElapsed(*token)).unwrap();
        }
    }
    tokens.dedup();
    assert_eq!(tokens.len(), 3);
}

#[test]
fn custom_bank_and_delay_from_json() {
    let json = r#"{
        "feedback_delay_ms": 250,
        "questions": [
            {"prompt": "2+2?", "options": ["3", "4", "5", "22"], "answer": "4"}
        ]
    }"#;
    let config = QuizConfig::from_json(json).unwrap();
    let mut quiz = Quiz::new(config, StdRng::seed_from_u64(1)).unwrap();
    start(&mut quiz);
    assert_eq!(quiz.question_view().unwrap().prompt_lines, vec!["２+２?"]);
    assert!(quiz.question_view().unwrap().session.is_finished());
    match pick(&mut quiz, true).as_slice() {
        [Effect::Schedule { token, delay_ms: 250 }] => {
            quiz.dispatch(QuizEvent::TimerElapsed(*token)).unwrap();
        }
        other => panic!("unexpected effects {:?}", other),
    }
    assert!(matches!(quiz.screen(), Screen::Title(_)));
}

#[test]
fn malformed_bank_is_rejected_at_load() {
    let json = r#"{"questions": [{"prompt": "p", "options": ["a", "b", "c", "d"], "answer": "e"}]}"#;
    let config = QuizConfig::from_json(json).unwrap();
    let err = Quiz::new(config, StdRng::seed_from_u64(1)).err().unwrap();
    assert!(matches!(err, QuizError::AnswerNotInOptions { index: 0, .. }));
}
