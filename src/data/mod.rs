mod bank;
mod loader;

pub use bank::reference_bank;
pub use loader::{load_questions_from_json, LoadError};
