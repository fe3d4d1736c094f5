use std::fmt;

use serde::Deserialize;

/// Number of choices every question carries.
pub const NUM_CHOICES: usize = 4;

/// Reasons a question cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// The prompt text is blank.
    EmptyText,
    /// The question does not have exactly four choices.
    WrongChoiceCount(usize),
    /// Two choices share the same text.
    DuplicateChoice(String),
    /// The correct answer is not one of the choices.
    CorrectNotAChoice(String),
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::EmptyText => write!(f, "question text is empty"),
            QuestionError::WrongChoiceCount(n) => {
                write!(f, "expected {} choices, found {}", NUM_CHOICES, n)
            }
            QuestionError::DuplicateChoice(c) => write!(f, "duplicate choice: {:?}", c),
            QuestionError::CorrectNotAChoice(c) => {
                write!(f, "correct answer {:?} is not one of the choices", c)
            }
        }
    }
}

impl std::error::Error for QuestionError {}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    text: String,
    choices: [String; NUM_CHOICES],
    correct: String,
}

/// Shape of a question on disk, before validation.
#[derive(Deserialize)]
struct RawQuestion {
    text: String,
    choices: Vec<String>,
    correct: String,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let count = raw.choices.len();
        let choices: [String; NUM_CHOICES] = raw
            .choices
            .try_into()
            .map_err(|_| QuestionError::WrongChoiceCount(count))?;
        Question::new(raw.text, choices, raw.correct)
    }
}

impl Question {
    /// Build a question, checking that `correct` is one of four distinct choices.
    pub fn new(
        text: impl Into<String>,
        choices: [String; NUM_CHOICES],
        correct: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        let correct = correct.into();

        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].contains(choice) {
                return Err(QuestionError::DuplicateChoice(choice.clone()));
            }
        }

        if !choices.contains(&correct) {
            return Err(QuestionError::CorrectNotAChoice(correct));
        }

        Ok(Self {
            text,
            choices,
            correct,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn choices(&self) -> &[String; NUM_CHOICES] {
        &self.choices
    }

    pub fn correct_choice(&self) -> &str {
        &self.correct
    }

    /// Exact, case-sensitive comparison against the correct choice.
    pub fn check_answer(&self, choice: &str) -> bool {
        choice == self.correct
    }
}

/// An ordered, read-only set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl From<Vec<Question>> for QuestionBank {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}
