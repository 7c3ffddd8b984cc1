//! # ProgressBar Component
//!
//! Bottom gauge row: how much of the deck already carries the annotation the
//! current mode edits, with the mode's key hints as the block title.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, LineGauge};

use crate::Mode;
use crate::tui::component::Component;

pub struct ProgressBar {
    /// Records already classified/answered
    pub reviewed: usize,
    pub total: usize,
    pub mode: Mode,
}

impl ProgressBar {
    fn key_hints(&self) -> &'static str {
        match self.mode {
            Mode::Classify => " y Higher  n Lower  ←/b Prev  →/f Next  s Save  q Quit ",
            Mode::Answer => " 1-9 Answer  ←/b Prev  →/f Next  s Save  q Quit ",
        }
    }

    fn verb(&self) -> &'static str {
        match self.mode {
            Mode::Classify => "Classified",
            Mode::Answer => "Answered",
        }
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let total = self.total.max(1);
        let ratio = self.reviewed as f64 / total as f64;
        let percent = (ratio * 100.0).round();

        let gauge = LineGauge::default()
            .block(
                Block::new()
                    .borders(Borders::TOP)
                    .title(Line::from(self.key_hints()).centered()),
            )
            .ratio(ratio)
            .filled_style(
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )
            .label(format!(
                "{} {}/{} ({percent}%)",
                self.verb(),
                self.reviewed,
                self.total
            ));

        frame.render_widget(gauge, area);
    }
}
