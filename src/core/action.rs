//! # Actions
//!
//! Everything that can happen in a quizmark session becomes an `Action`.
//! User presses `n` in classify mode? That's `Action::Classify(LowerOrder)`.
//! User presses `3` in answer mode? That's `Action::SelectOption(2)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the caller must perform.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on the state.

use log::debug;

use crate::core::deck::Classification;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    Classify(Classification),
    SelectOption(usize),
    Save,
    Quit,
}

/// I/O the TUI layer must perform after an `update()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist the deck and stay in the loop.
    Save,
    /// Persist the deck and leave the loop.
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {action:?}");
    match action {
        Action::Advance => {
            app.advance();
            Effect::None
        }
        Action::Retreat => {
            app.retreat();
            Effect::None
        }
        Action::Classify(classification) => {
            app.classify(classification);
            app.status_message.clear();
            Effect::None
        }
        Action::SelectOption(index) => {
            match app.select_option(index) {
                Ok(()) => app.status_message.clear(),
                // Recoverable: report and let the user pick again
                Err(e) => app.status_message = e.to_string(),
            }
            Effect::None
        }
        Action::Save => Effect::Save,
        Action::Quit => Effect::Quit,
    }
}
