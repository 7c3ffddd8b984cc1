//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use crate::Mode;
use crate::core::deck::QuestionRecord;
use crate::core::state::App;

/// A two-record deck: the first untouched, the second already answered.
pub fn sample_records() -> Vec<QuestionRecord> {
    let first = QuestionRecord::new(
        "What is the capital of France?",
        vec![
            "Paris".to_string(),
            "Lyon".to_string(),
            "Marseille".to_string(),
        ],
    );
    let mut second = QuestionRecord::new(
        "Which of these is a prime number?",
        vec!["4".to_string(), "7".to_string()],
    );
    second.answer = Some("7".to_string());
    vec![first, second]
}

/// Creates a test App over the sample deck.
pub fn test_app(mode: Mode) -> App {
    App::new(PathBuf::from("deck.json"), mode, sample_records())
}
