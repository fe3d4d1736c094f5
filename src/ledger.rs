//! Append-only result ledger.
//!
//! Completed quizzes are written through the [`ResultLedger`] trait. The
//! file-backed [`CsvLedger`] opens its file for every append and closes it
//! before returning, writing the header row only when the file is new or empty.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::{ResultRecord, RECORD_HEADER};

/// Failure to persist or read back results.
#[derive(Debug)]
pub enum LedgerError {
    /// The ledger file could not be opened or written.
    Io { path: PathBuf, source: io::Error },
    /// A row could not be encoded or decoded.
    Csv { path: PathBuf, source: csv::Error },
}

impl LedgerError {
    fn io(path: &Path, source: io::Error) -> Self {
        LedgerError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn csv(path: &Path, source: csv::Error) -> Self {
        LedgerError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Io { path, source } => {
                write!(f, "Could not save results to {}: {}", path.display(), source)
            }
            LedgerError::Csv { path, source } => {
                write!(f, "Invalid result row in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::Io { source, .. } => Some(source),
            LedgerError::Csv { source, .. } => Some(source),
        }
    }
}

/// A durable sink for completed quiz results.
pub trait ResultLedger {
    /// Append one record after every record already stored.
    fn append(&mut self, record: &ResultRecord) -> Result<(), LedgerError>;

    /// Human-readable location, shown after a successful save.
    fn location(&self) -> String;
}

impl<L: ResultLedger + ?Sized> ResultLedger for &mut L {
    fn append(&mut self, record: &ResultRecord) -> Result<(), LedgerError> {
        (**self).append(record)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Comma-separated ledger file.
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ResultLedger for CsvLedger {
    fn append(&mut self, record: &ResultRecord) -> Result<(), LedgerError> {
        let path = self.path.as_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LedgerError::io(path, e))?;
        let needs_header = file.metadata().map_err(|e| LedgerError::io(path, e))?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer
                .write_record(RECORD_HEADER)
                .map_err(|e| LedgerError::csv(path, e))?;
        }
        writer
            .serialize(record)
            .map_err(|e| LedgerError::csv(path, e))?;
        writer.flush().map_err(|e| LedgerError::io(path, e))?;

        tracing::info!(path = %path.display(), name = %record.name, score = record.score, "result saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Ledger that keeps records in memory. Useful for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    records: Vec<ResultRecord>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }
}

impl ResultLedger for MemoryLedger {
    fn append(&mut self, record: &ResultRecord) -> Result<(), LedgerError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Read every data row of a CSV ledger, in the order they were written.
pub fn read_ledger<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRecord>, LedgerError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| LedgerError::csv(path, e))?;

    reader
        .deserialize()
        .map(|row| row.map_err(|e| LedgerError::csv(path, e)))
        .collect()
}
