// tests/session_flow.rs

use bikini_quiz::{
    classify, rank_label, reference_bank, MemoryLedger, PlayerProfile, QuizSession, RankTier,
    ResultLedger, ResultRecord, SessionError, SessionState, WatchDuration,
};

/// Answer the first `correct` questions right and the rest wrong.
fn play(session: &mut QuizSession, correct: usize) {
    let mut answered = 0;
    while let Ok(question) = session.current_question() {
        let choice = if answered < correct {
            question.correct_choice()
        } else {
            question
                .choices()
                .iter()
                .find(|c| c.as_str() != question.correct_choice())
                .unwrap()
                .as_str()
        };
        session.submit_answer(choice).unwrap();
        answered += 1;
    }
}

#[test]
fn reference_scores_map_to_tiers() {
    let bank = reference_bank().unwrap();
    let cases = [
        (15, RankTier::GoofyGoober),
        (9, RankTier::Victory),
        (5, RankTier::BoatingSchool),
        (1, RankTier::Barnacles),
        (0, RankTier::Plankton),
    ];

    for (correct, tier) in cases {
        let mut session = QuizSession::start(&bank);
        play(&mut session, correct);
        assert_eq!(session.final_score(), correct);
        assert_eq!(classify(session.final_score(), bank.len()), tier);
    }
}

#[test]
fn cursor_moves_once_per_accepted_submission() {
    let bank = reference_bank().unwrap();
    let mut session = QuizSession::start(&bank);
    let inputs = ["", "Fry Cook", "", "", "nope", "Pineapple", ""];

    let mut last_cursor = session.cursor();
    for input in inputs {
        let result = session.submit_answer(input);
        if input.is_empty() {
            assert_eq!(result, Err(SessionError::NoSelection));
            assert_eq!(session.cursor(), last_cursor);
        } else {
            assert!(result.is_ok());
            assert_eq!(session.cursor(), last_cursor + 1);
        }
        assert!(session.final_score() <= bank.len());
        last_cursor = session.cursor();
    }

    assert_eq!(session.cursor(), 3);
    assert_eq!(session.final_score(), 2);
    assert_eq!(session.question_number(), 4);
}

#[test]
fn exact_match_only() {
    let bank = reference_bank().unwrap();
    let mut session = QuizSession::start(&bank);

    let outcome = session.submit_answer("fry cook").unwrap();
    assert!(!outcome.correct);
    let outcome = session.submit_answer("Patrick ").unwrap();
    assert!(!outcome.correct);
    let outcome = session.submit_answer("Pineapple").unwrap();
    assert!(outcome.correct);
    assert_eq!(session.final_score(), 1);
}

#[test]
fn completed_session_rejects_everything() {
    let bank = reference_bank().unwrap();
    let mut session = QuizSession::start(&bank);
    play(&mut session, 4);

    assert!(!session.has_more());
    assert_eq!(session.state(), SessionState::Complete);
    assert_eq!(session.question_number(), bank.len());
    assert!(matches!(
        session.current_question(),
        Err(SessionError::OutOfRange { cursor: 15, len: 15 })
    ));
    assert!(session.submit_answer("License").is_err());
    assert_eq!(session.final_score(), 4);
}

#[test]
fn finished_session_lands_in_ledger() {
    let bank = reference_bank().unwrap();
    let profile = PlayerProfile::parse("Alli", "21", WatchDuration::TwoPlusYears).unwrap();
    let mut ledger = MemoryLedger::new();

    let mut session = QuizSession::start(&bank);
    play(&mut session, 12);
    ledger
        .append(&ResultRecord::new(&profile, session.final_score(), bank.len()))
        .unwrap();

    session.reset();
    play(&mut session, 2);
    ledger
        .append(&ResultRecord::new(&profile, session.final_score(), bank.len()))
        .unwrap();

    let ranks: Vec<&str> = ledger.records().iter().map(|r| r.rank.as_str()).collect();
    assert_eq!(ranks, [rank_label(12, 15), rank_label(2, 15)]);
    assert_eq!(ledger.records()[0].name, "Alli");
}
