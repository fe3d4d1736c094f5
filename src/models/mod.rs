mod player;
mod question;
mod record;

pub use player::{PlayerProfile, ValidationError, WatchDuration};
pub use question::{Question, QuestionBank, QuestionError, NUM_CHOICES};
pub use record::{ResultRecord, RECORD_HEADER};

/// Which screen the terminal front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
