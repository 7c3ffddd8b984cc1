use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern: they are built fresh each frame from
/// borrowed `App` data and render into a given `Rect`. None of them hold
/// state across frames — the session state lives in `core::state::App`.
///
/// The `render` method takes `&mut self` to align with Ratatui's
/// `StatefulWidget` pattern, should a component ever need internal caches.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
