//! # TUI Components
//!
//! All components here are stateless, props-based renderers: each is built
//! fresh per frame from borrowed session data, and `draw_ui` composes them.
//!
//! - `StatusBar`: one-line header with the deck name, mode, and status text
//! - `QuestionCard`: the current question, its options, and its annotation
//! - `ProgressBar`: review-progress gauge with the key hints for the mode

pub mod progress_bar;
pub mod question_card;
pub mod status_bar;

pub use progress_bar::ProgressBar;
pub use question_card::QuestionCard;
pub use status_bar::StatusBar;
