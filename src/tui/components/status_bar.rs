//! # StatusBar Component
//!
//! One-line header showing which deck is open, the session mode, an unsaved
//! marker, and the transient status message (save confirmations, recoverable
//! input errors).
//!
//! The line is truncated to the terminal width by display width, so wide
//! characters in file names or status text never split mid-glyph.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::Mode;
use crate::tui::component::Component;

pub struct StatusBar {
    /// Name of the deck file being annotated
    pub file_name: String,
    pub mode: Mode,
    /// Whether unsaved edits exist
    pub dirty: bool,
    /// Transient feedback line from the last action
    pub status_message: String,
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let marker = if self.dirty { "*" } else { "" };
        let text = if self.status_message.is_empty() {
            format!(
                "quizmark — {}{} [{}]",
                self.file_name,
                marker,
                self.mode.label()
            )
        } else {
            format!(
                "quizmark — {}{} [{}] | {}",
                self.file_name,
                marker,
                self.mode.label(),
                self.status_message
            )
        };

        frame.render_widget(Span::raw(fit_width(&text, area.width as usize)), area);
    }
}

/// Truncate `s` to at most `max` terminal columns, ending in an ellipsis
/// when anything was cut.
fn fit_width(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
