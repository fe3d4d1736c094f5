//! # bikini-quiz
//!
//! A single-player trivia quiz for the terminal. A player fills in a short
//! form, answers a fixed bank of multiple-choice questions, gets a rank for
//! their score, and the result is appended to a CSV ledger.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bikini_quiz::{CsvLedger, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::reference()?.with_ledger(Box::new(CsvLedger::new("results.csv")));
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```
//!
//! The quiz logic can also be driven without a terminal:
//!
//! ```rust
//! use bikini_quiz::{reference_bank, rank_label, QuizSession};
//!
//! let bank = reference_bank().unwrap();
//! let mut session = QuizSession::start(&bank);
//! while let Ok(question) = session.current_question() {
//!     let choice = question.correct_choice().to_string();
//!     session.submit_answer(&choice).unwrap();
//! }
//! assert_eq!(rank_label(session.final_score(), bank.len()), "You are a Goofy Goober!!!!");
//! ```

mod app;
mod data;
pub mod ledger;
mod models;
pub mod rank;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, FormField, PlayerForm, SaveStatus};
pub use data::{load_questions_from_json, reference_bank, LoadError};
pub use ledger::{read_ledger, CsvLedger, LedgerError, MemoryLedger, ResultLedger};
pub use models::{
    AppState, PlayerProfile, Question, QuestionBank, QuestionError, ResultRecord,
    ValidationError, WatchDuration, NUM_CHOICES, RECORD_HEADER,
};
pub use rank::{classify, rank_label, RankTier};
pub use session::{AnswerOutcome, QuizSession, SessionError, SessionState};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// A built-in question failed validation.
    Bank(QuestionError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Bank(e) => write!(f, "Invalid question: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Bank(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<QuestionError> for QuizError {
    fn from(err: QuestionError) -> Self {
        QuizError::Bank(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Ledger file used when no other ledger is given.
pub const DEFAULT_RESULTS_PATH: &str = "results.csv";

/// A quiz that can be run in the terminal.
pub struct Quiz {
    bank: QuestionBank,
    ledger: Box<dyn ResultLedger>,
}

impl Quiz {
    /// Create a quiz over `bank` that appends results to [`DEFAULT_RESULTS_PATH`].
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            ledger: Box::new(CsvLedger::new(DEFAULT_RESULTS_PATH)),
        }
    }

    /// Create a quiz over the built-in question bank.
    pub fn reference() -> Result<Self, QuizError> {
        Ok(Self::new(reference_bank()?))
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bikini_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let bank = load_questions_from_json(path)?;
        Ok(Self::new(bank))
    }

    /// Send finished results to `ledger` instead of the default file.
    pub fn with_ledger(mut self, ledger: Box<dyn ResultLedger>) -> Self {
        self.ledger = ledger;
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(self) -> Result<(), QuizError> {
        let Quiz { bank, ledger } = self;
        let mut app = App::new(QuizSession::start(&bank), ledger);

        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut app)
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    tracing::info!("quiz closed");
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    let on_watch_field = app.form().focus == FormField::WatchDuration;
    match key {
        KeyCode::Esc => return true,
        KeyCode::Enter => {
            // Rejections are shown on the form.
            let _ = app.start_quiz();
        }
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous_field(),
        KeyCode::Right if on_watch_field => app.next_watch_duration(),
        KeyCode::Left if on_watch_field => app.previous_watch_duration(),
        KeyCode::Backspace => app.form_input_pop(),
        KeyCode::Char(c) => app.form_input_push(c),
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ 'a'..='d') => app.select_option(c as usize - 'a' as usize),
        KeyCode::Char(c @ '1'..='4') => app.select_option(c as usize - '1' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
