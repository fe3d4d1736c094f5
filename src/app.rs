use crate::ledger::ResultLedger;
use crate::models::{
    AppState, PlayerProfile, Question, ResultRecord, ValidationError, WatchDuration, NUM_CHOICES,
};
use crate::session::{QuizSession, SessionError, SessionState};

/// Field of the player form that has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    WatchDuration,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Age,
            FormField::Age => FormField::WatchDuration,
            FormField::WatchDuration => FormField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::WatchDuration,
            FormField::Age => FormField::Name,
            FormField::WatchDuration => FormField::Age,
        }
    }
}

const NAME_INPUT_MAX: usize = 32;
const AGE_INPUT_MAX: usize = 3;

/// Raw text of the player form on the welcome screen.
#[derive(Debug, Clone)]
pub struct PlayerForm {
    pub name: String,
    pub age: String,
    pub watch_duration: WatchDuration,
    pub focus: FormField,
    pub error: Option<ValidationError>,
}

impl Default for PlayerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            watch_duration: WatchDuration::default(),
            focus: FormField::Name,
            error: None,
        }
    }
}

/// Outcome of writing the finished quiz to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved(String),
    Failed(String),
}

pub struct App<'a> {
    pub state: AppState,
    session: QuizSession<'a>,
    ledger: Box<dyn ResultLedger + 'a>,
    form: PlayerForm,
    profile: Option<PlayerProfile>,
    selected_option: Option<usize>,
    warning: Option<String>,
    result: Option<ResultRecord>,
    save_status: Option<SaveStatus>,
}

impl<'a> App<'a> {
    pub fn new(session: QuizSession<'a>, ledger: Box<dyn ResultLedger + 'a>) -> Self {
        Self {
            state: AppState::Welcome,
            session,
            ledger,
            form: PlayerForm::default(),
            profile: None,
            selected_option: None,
            warning: None,
            result: None,
            save_status: None,
        }
    }

    pub fn session(&self) -> &QuizSession<'a> {
        &self.session
    }

    pub fn form(&self) -> &PlayerForm {
        &self.form
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.session.current_question().ok()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn result(&self) -> Option<&ResultRecord> {
        self.result.as_ref()
    }

    pub fn save_status(&self) -> Option<&SaveStatus> {
        self.save_status.as_ref()
    }

    pub fn form_input_push(&mut self, c: char) {
        let field = match self.form.focus {
            FormField::Name if self.form.name.chars().count() < NAME_INPUT_MAX => {
                &mut self.form.name
            }
            FormField::Age if self.form.age.len() < AGE_INPUT_MAX => &mut self.form.age,
            _ => return,
        };
        field.push(c);
        self.form.error = None;
    }

    pub fn form_input_pop(&mut self) {
        match self.form.focus {
            FormField::Name => {
                self.form.name.pop();
            }
            FormField::Age => {
                self.form.age.pop();
            }
            FormField::WatchDuration => {}
        }
    }

    pub fn focus_next_field(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.form.focus = self.form.focus.previous();
    }

    pub fn next_watch_duration(&mut self) {
        self.form.watch_duration = self.form.watch_duration.next();
    }

    pub fn previous_watch_duration(&mut self) {
        self.form.watch_duration = self.form.watch_duration.previous();
    }

    /// Validate the form and, if it passes, begin a fresh session.
    pub fn start_quiz(&mut self) -> Result<(), ValidationError> {
        let profile = PlayerProfile::parse(&self.form.name, &self.form.age, self.form.watch_duration)
            .inspect_err(|e| {
                tracing::debug!(error = %e, "player form rejected");
                self.form.error = Some(*e);
            })?;

        tracing::info!(name = profile.name(), age = profile.age(), "player registered");
        self.form.error = None;
        self.profile = Some(profile);
        self.session.reset();
        self.selected_option = None;
        self.warning = None;
        self.result = None;
        self.save_status = None;

        if self.session.state() == SessionState::Complete {
            self.finish();
        } else {
            self.state = AppState::Quiz;
        }
        Ok(())
    }

    pub fn select_option(&mut self, index: usize) {
        if index < NUM_CHOICES {
            self.selected_option = Some(index);
            self.warning = None;
        }
    }

    pub fn select_next_option(&mut self) {
        let next = self.selected_option.map_or(0, |i| (i + 1) % NUM_CHOICES);
        self.select_option(next);
    }

    pub fn select_previous_option(&mut self) {
        let previous = self
            .selected_option
            .map_or(NUM_CHOICES - 1, |i| (i + NUM_CHOICES - 1) % NUM_CHOICES);
        self.select_option(previous);
    }

    /// Submit the highlighted choice, or an empty one if nothing is highlighted.
    pub fn submit_answer(&mut self) {
        let choice = match (self.selected_option, self.current_question()) {
            (Some(index), Some(question)) => question.choices()[index].as_str(),
            _ => "",
        };

        match self.session.submit_answer(choice) {
            Ok(outcome) => {
                self.selected_option = None;
                self.warning = None;
                if outcome.state == SessionState::Complete {
                    self.finish();
                }
            }
            Err(SessionError::NoSelection) => {
                self.warning = Some(SessionError::NoSelection.to_string());
            }
            Err(e @ SessionError::OutOfRange { .. }) => {
                tracing::error!(error = %e, "quiz screen shown for a completed session");
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.state = AppState::Result;

        let Some(profile) = &self.profile else {
            return;
        };
        let record = ResultRecord::new(
            profile,
            self.session.final_score(),
            self.session.total_questions(),
        );
        tracing::info!(name = %record.name, score = record.score, rank = %record.rank, "quiz finished");

        self.save_status = Some(match self.ledger.append(&record) {
            Ok(()) => SaveStatus::Saved(self.ledger.location()),
            Err(e) => {
                tracing::error!(error = %e, "failed to save result");
                SaveStatus::Failed(e.to_string())
            }
        });
        self.result = Some(record);
    }

    /// Back to the player form, keeping what was typed last time.
    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.form.focus = FormField::Name;
        self.session.reset();
        self.selected_option = None;
        self.warning = None;
        self.result = None;
        self.save_status = None;
    }
}
