//! # Core Application Logic
//!
//! This module contains quizmark's business logic. It knows nothing about
//! any specific UI technology — the ratatui adapter lives in `tui`.
//!
//! ```text
//!   deck.rs ──loads──▶ state.rs (App) ◀──mutates── action.rs (update)
//!      ▲                                                │
//!      └───────────────saves on Effect::Save/Quit───────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: The on-disk question deck — records, loading, atomic saving
//! - [`state`]: The `App` struct — all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: The `~/.quizmark/config.toml` settings layer

pub mod action;
pub mod config;
pub mod deck;
pub mod state;
