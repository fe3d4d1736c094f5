use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::QuestionBank;

/// Error type for question loading operations.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to read the file.
    Io(io::Error),
    /// Failed to parse JSON, including questions that fail validation.
    Parse(serde_json::Error),
    /// The file contains no questions.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Failed to read file: {}", e),
            LoadError::Parse(e) => write!(f, "Failed to parse JSON: {}", e),
            LoadError::Empty => write!(f, "File must contain at least one question"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load a question bank from a JSON array of
/// `{ "text": ..., "choices": [4 strings], "correct": ... }` objects.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path)?;
    let bank: QuestionBank = serde_json::from_str(&json_content)?;

    if bank.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::info!(path = %path.display(), count = bank.len(), "loaded question bank");
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("bikini-quiz-loader-{}.json", name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp(
            "valid",
            r#"[
                {"text": "Pet snail?", "choices": ["Speedy", "Gary", "Slimy", "Jerry"], "correct": "Gary"},
                {"text": "Home?", "choices": ["Boat", "Rock", "Pineapple", "Cave"], "correct": "Pineapple"}
            ]"#,
        );
        let bank = load_questions_from_json(&path).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[1].text(), "Home?");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_empty_file() {
        let path = write_temp("empty", "[]");
        assert!(matches!(load_questions_from_json(&path), Err(LoadError::Empty)));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_invalid_question() {
        let path = write_temp(
            "invalid",
            r#"[{"text": "q", "choices": ["a", "b", "c", "d"], "correct": "x"}]"#,
        );
        assert!(matches!(load_questions_from_json(&path), Err(LoadError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_questions_from_json("/nonexistent/bikini-quiz/questions.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
