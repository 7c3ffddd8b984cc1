//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop Shape
//!
//! Draw, then one blocking `event::read()` per iteration. There is nothing
//! animating between keypresses, so there is no polling and no redraw timer:
//! execution suspends in the read until the user acts, and every action is
//! followed by a redraw at the top of the loop.

mod component;
mod components;
mod event;
mod ui;

use std::io;

use chrono::Local;
use log::{debug, info, warn};
use ratatui::DefaultTerminal;

use crate::Mode;
use crate::core::action::{Action, Effect, update};
use crate::core::deck::{self, Classification};
use crate::core::state::App;
use crate::tui::event::TuiEvent;

/// Run the interactive session to completion. Restores the terminal on all
/// exit paths, including errors.
pub fn run(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    info!(
        "entering event loop: {} questions from {}, {} mode",
        app.records.len(),
        app.path.display(),
        app.mode.label()
    );

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, app))?;

        let Some(tui_event) = event::read_event()? else {
            continue;
        };

        // Resize is picked up by the draw at the top of the loop
        if tui_event == TuiEvent::Resize {
            continue;
        }

        // Ctrl+C leaves without saving, even when the deck path has become
        // unwritable
        if tui_event == TuiEvent::ForceQuit {
            if app.dirty {
                warn!("interrupted with unsaved changes");
            }
            return Ok(());
        }

        let Some(action) = translate(tui_event, app.mode) else {
            debug!("ignoring {tui_event:?} in {} mode", app.mode.label());
            continue;
        };

        match update(app, action) {
            Effect::None => {}
            Effect::Save => {
                perform_save(app);
            }
            Effect::Quit => {
                // Stay in the session when the save fails; edits would be
                // lost otherwise and the status bar shows what went wrong
                if perform_save(app) {
                    return Ok(());
                }
            }
        }
    }
}

/// Map a mode-agnostic input event onto a core action. Events with no
/// meaning in the current mode fall through to `None` and are ignored.
fn translate(tui_event: TuiEvent, mode: Mode) -> Option<Action> {
    match tui_event {
        TuiEvent::Next => Some(Action::Advance),
        TuiEvent::Prev => Some(Action::Retreat),
        TuiEvent::Save => Some(Action::Save),
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Yes if mode == Mode::Classify => {
            Some(Action::Classify(Classification::HigherOrder))
        }
        TuiEvent::No if mode == Mode::Classify => {
            Some(Action::Classify(Classification::LowerOrder))
        }
        TuiEvent::Digit(digit) if mode == Mode::Answer => {
            Some(Action::SelectOption(usize::from(digit) - 1))
        }
        _ => None,
    }
}

/// Write the deck back to its source path, updating the dirty flag and the
/// status message. Returns true on success.
fn perform_save(app: &mut App) -> bool {
    match deck::save_deck(&app.path, &app.records, &app.save_options) {
        Ok(()) => {
            app.mark_saved();
            app.status_message =
                format!("Progress saved at {}", Local::now().format("%H:%M:%S"));
            info!("deck saved to {}", app.path.display());
            true
        }
        Err(e) => {
            app.status_message = format!("Save failed: {e}");
            warn!("saving deck failed: {e}");
            false
        }
    }
}
