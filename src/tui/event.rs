use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events, decoupled from crossterm types.
///
/// The mapping is mode-agnostic: `Yes` and `Digit` are produced regardless
/// of mode and dropped during translation when the mode gives them no
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Next,
    Prev,
    Yes,
    No,
    Digit(u8),
    Save,
    Quit,
    ForceQuit,
    Resize,
}

/// Block until the next terminal event and map it to a `TuiEvent`.
/// Unmapped input returns `None`.
pub fn read_event() -> io::Result<Option<TuiEvent>> {
    match event::read()? {
        // It's important to check for key *press* events, as crossterm also
        // emits key release and repeat events on Windows.
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => Ok(map_key(key_event)),
        Event::Resize(_, _) => Ok(Some(TuiEvent::Resize)),
        _ => Ok(None),
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    log::debug!(
        "key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('y')) => Some(TuiEvent::Yes),
        (_, KeyCode::Char('n')) => Some(TuiEvent::No),
        (_, KeyCode::Char('s')) => Some(TuiEvent::Save),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        // Arrow keys, plus the legacy f/b bindings from earlier revisions
        (_, KeyCode::Right | KeyCode::Char('f')) => Some(TuiEvent::Next),
        (_, KeyCode::Left | KeyCode::Char('b')) => Some(TuiEvent::Prev),
        (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::Digit(c as u8 - b'0')),
        _ => None,
    }
}
