//! # Deck I/O
//!
//! Load and save the question deck: a JSON array of question records.
//!
//! Loading parses each element individually so a malformed record can be
//! reported by its index instead of a bare serde error. Fields this tool does
//! not manage are captured in a flattened map and written back untouched.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) so a failure
//! mid-write never truncates the original file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Binary tag a user assigns to a question in classify mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    HigherOrder,
    LowerOrder,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::HigherOrder => "higher order",
            Classification::LowerOrder => "lower order",
        }
    }
}

/// One question entry: the prompt, its options, and the annotations.
///
/// `extra` holds any fields present in the source file that this tool does
/// not manage; they survive a load/save round trip in their original order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            question: question.into(),
            options,
            answer: None,
            classification: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Options applied when writing the deck back to disk.
#[derive(Clone, Copy, Debug)]
pub struct SaveOptions {
    /// Pretty-print the JSON output.
    pub pretty: bool,
    /// Copy the previous file to `<path>.bak` before replacing it.
    pub backup: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            backup: false,
        }
    }
}

#[derive(Debug)]
pub enum DeckError {
    NotFound(PathBuf),
    Io(io::Error),
    Parse(serde_json::Error),
    MalformedRecord { index: usize, reason: String },
    Write(io::Error),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::NotFound(path) => write!(f, "deck file not found: {}", path.display()),
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Parse(e) => write!(f, "deck is not valid JSON: {e}"),
            DeckError::MalformedRecord { index, reason } => {
                write!(f, "malformed record at index {index}: {reason}")
            }
            DeckError::Write(e) => write!(f, "failed to write deck: {e}"),
        }
    }
}

impl std::error::Error for DeckError {}

/// Load a deck from `path`.
///
/// The file must contain a JSON array of objects, each with at least a
/// `question` and a non-empty `options` list. A recorded `answer` that does
/// not match any option is kept but logged — the file may carry answers
/// produced elsewhere, and this tool exists to repair them.
pub fn load_deck(path: &Path) -> Result<Vec<QuestionRecord>, DeckError> {
    if !path.exists() {
        return Err(DeckError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(DeckError::Io)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&raw).map_err(DeckError::Parse)?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let record: QuestionRecord =
            serde_json::from_value(value).map_err(|e| DeckError::MalformedRecord {
                index,
                reason: e.to_string(),
            })?;
        if record.options.is_empty() {
            return Err(DeckError::MalformedRecord {
                index,
                reason: "options must not be empty".to_string(),
            });
        }
        if let Some(answer) = &record.answer
            && !record.options.iter().any(|option| option == answer)
        {
            warn!("record {index}: answer {answer:?} does not match any option");
        }
        records.push(record);
    }

    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Atomically write the deck back to `path`.
pub fn save_deck(
    path: &Path,
    records: &[QuestionRecord],
    options: &SaveOptions,
) -> Result<(), DeckError> {
    let json = if options.pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(|e| DeckError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    if options.backup && path.exists() {
        fs::copy(path, path.with_extension("bak")).map_err(DeckError::Write)?;
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json).map_err(DeckError::Write)?;
    fs::rename(&tmp_path, path).map_err(DeckError::Write)?;

    debug!("saved {} records to {}", records.len(), path.display());
    Ok(())
}
