//! Quiz session state machine.
//!
//! A session walks a cursor over a borrowed [`QuestionBank`], scoring each
//! submitted choice. The cursor advances on every accepted submission, correct
//! or not, so the session is complete exactly when the cursor reaches the end
//! of the bank.

use std::fmt;

use crate::models::{Question, QuestionBank};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A question is waiting to be answered.
    AwaitingAnswer,
    /// Every question has been answered.
    Complete,
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// An answer was submitted without a choice. Nothing changed.
    NoSelection,
    /// The operation needs a pending question but the session is complete.
    OutOfRange { cursor: usize, len: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoSelection => {
                write!(f, "Please select an answer before continuing!")
            }
            SessionError::OutOfRange { cursor, len } => {
                write!(f, "No question at position {} of {}", cursor, len)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// What happened on an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub state: SessionState,
}

/// One player's pass through a question bank.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    cursor: usize,
    score: usize,
}

impl<'a> QuizSession<'a> {
    /// Start a fresh session at the first question.
    pub fn start(bank: &'a QuestionBank) -> Self {
        tracing::info!(questions = bank.len(), "quiz session started");
        Self {
            bank,
            cursor: 0,
            score: 0,
        }
    }

    /// Go back to the first question and clear the score.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.score = 0;
        tracing::info!("quiz session reset");
    }

    pub fn state(&self) -> SessionState {
        if self.has_more() {
            SessionState::AwaitingAnswer
        } else {
            SessionState::Complete
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.bank.len()
    }

    pub fn current_question(&self) -> Result<&'a Question, SessionError> {
        self.bank.get(self.cursor).ok_or(SessionError::OutOfRange {
            cursor: self.cursor,
            len: self.bank.len(),
        })
    }

    /// Score `choice` against the current question and move to the next one.
    ///
    /// An empty choice is rejected with [`SessionError::NoSelection`] and
    /// leaves the cursor and score untouched. Matching is exact.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, SessionError> {
        let question = self.current_question().inspect_err(|e| {
            tracing::warn!(error = %e, "answer submitted to a completed session");
        })?;

        if choice.is_empty() {
            tracing::warn!(cursor = self.cursor, "answer submitted without a selection");
            return Err(SessionError::NoSelection);
        }

        let correct = question.check_answer(choice);
        if correct {
            self.score += 1;
        }
        self.cursor += 1;

        tracing::debug!(cursor = self.cursor, correct, score = self.score, "answer submitted");

        let state = self.state();
        if state == SessionState::Complete {
            tracing::info!(score = self.score, total = self.bank.len(), "quiz session complete");
        }

        Ok(AnswerOutcome { correct, state })
    }

    pub fn final_score(&self) -> usize {
        self.score
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// 1-based number of the question on screen, clamped to the bank size.
    pub fn question_number(&self) -> usize {
        (self.cursor + 1).min(self.bank.len().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bank() -> QuestionBank {
        let q = |text: &str, correct: &str| {
            Question::new(text, ["a", "b", "c", "d"].map(String::from), correct).unwrap()
        };
        QuestionBank::new(vec![q("one", "a"), q("two", "b"), q("three", "c")])
    }

    #[test]
    fn test_starts_awaiting_first_question() {
        let bank = small_bank();
        let session = QuizSession::start(&bank);
        assert_eq!(session.state(), SessionState::AwaitingAnswer);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.final_score(), 0);
        assert_eq!(session.current_question().unwrap().text(), "one");
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn test_submit_scores_and_advances() {
        let bank = small_bank();
        let mut session = QuizSession::start(&bank);

        let outcome = session.submit_answer("a").unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.state, SessionState::AwaitingAnswer);
        assert_eq!(session.final_score(), 1);

        let outcome = session.submit_answer("c").unwrap();
        assert!(!outcome.correct);
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.final_score(), 1);
    }

    #[test]
    fn test_empty_choice_changes_nothing() {
        let bank = small_bank();
        let mut session = QuizSession::start(&bank);
        session.submit_answer("a").unwrap();

        assert_eq!(session.submit_answer(""), Err(SessionError::NoSelection));
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.final_score(), 1);
    }

    #[test]
    fn test_near_miss_does_not_score() {
        let bank = small_bank();
        let mut session = QuizSession::start(&bank);
        session.submit_answer("A").unwrap();
        session.submit_answer(" b").unwrap();
        session.submit_answer("c ").unwrap();
        assert_eq!(session.final_score(), 0);
    }

    #[test]
    fn test_complete_rejects_further_calls() {
        let bank = small_bank();
        let mut session = QuizSession::start(&bank);
        for choice in ["a", "b", "c"] {
            session.submit_answer(choice).unwrap();
        }

        assert!(!session.has_more());
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.final_score(), 3);
        assert_eq!(session.question_number(), 3);

        let out_of_range = SessionError::OutOfRange { cursor: 3, len: 3 };
        assert_eq!(session.current_question().unwrap_err(), out_of_range);
        assert_eq!(session.submit_answer("a"), Err(out_of_range));
        assert_eq!(session.submit_answer(""), Err(out_of_range));
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let bank = small_bank();
        let mut session = QuizSession::start(&bank);
        session.submit_answer("a").unwrap();
        session.submit_answer("b").unwrap();

        session.reset();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.final_score(), 0);
        assert!(session.has_more());
        assert_eq!(session.total_questions(), 3);
    }

    #[test]
    fn test_empty_bank_is_complete() {
        let bank = QuestionBank::new(Vec::new());
        let session = QuizSession::start(&bank);
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.question_number(), 1);
        assert!(session.current_question().is_err());
    }
}
