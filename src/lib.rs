//! Quizmark library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// What a session records for each question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Tag each question as higher or lower order
    Classify,
    /// Record the correct answer for each question
    #[default]
    Answer,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Classify => "classify",
            Mode::Answer => "answer",
        }
    }
}
