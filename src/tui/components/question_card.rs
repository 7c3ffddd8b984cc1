//! # QuestionCard Component
//!
//! The main panel: question text, numbered options, and the record's current
//! annotation (or a MISSING marker). The block title doubles as the
//! position indicator, e.g. `Question 12 of 50`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::Mode;
use crate::core::deck::QuestionRecord;
use crate::tui::component::Component;

pub struct QuestionCard<'a> {
    pub record: &'a QuestionRecord,
    pub mode: Mode,
    /// One-based position of the record under the cursor
    pub position: usize,
    pub total: usize,
}

impl QuestionCard<'_> {
    fn annotation_line(&self) -> Line<'static> {
        match self.mode {
            Mode::Classify => match self.record.classification {
                Some(classification) => {
                    Line::from(format!("Current classification: {}", classification.label()).blue())
                }
                None => Line::from("MISSING CLASSIFICATION".red().bold()),
            },
            Mode::Answer => match &self.record.answer {
                Some(answer) => Line::from(format!("Current answer: {answer}").blue()),
                None => Line::from("MISSING ANSWER".red().bold()),
            },
        }
    }
}

impl Component for QuestionCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(self.record.question.clone()), Line::from("")];
        lines.extend(
            self.record
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| Line::from(format!("{} - {}", i + 1, option).yellow())),
        );
        lines.push(Line::from(""));
        lines.push(self.annotation_line());

        let title = format!(" Question {} of {} ", self.position, self.total);
        let card = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(
                Block::new()
                    .borders(Borders::TOP | Borders::RIGHT)
                    .title(title)
                    .padding(Padding::new(1, 1, 1, 1)),
            );

        frame.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::core::deck::Classification;
    use crate::test_support::sample_records;

    fn render_to_string(card: &mut QuestionCard, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_shows_question_options_and_position() {
        let records = sample_records();
        let mut card = QuestionCard {
            record: &records[0],
            mode: Mode::Answer,
            position: 1,
            total: 2,
        };
        let text = render_to_string(&mut card, 60, 20);
        assert!(text.contains("Question 1 of 2"));
        assert!(text.contains("What is the capital of France?"));
        assert!(text.contains("1 - Paris"));
        assert!(text.contains("3 - Marseille"));
    }

    #[test]
    fn test_missing_markers_per_mode() {
        let records = sample_records();
        let mut card = QuestionCard {
            record: &records[0],
            mode: Mode::Classify,
            position: 1,
            total: 2,
        };
        assert!(render_to_string(&mut card, 60, 20).contains("MISSING CLASSIFICATION"));

        card.mode = Mode::Answer;
        assert!(render_to_string(&mut card, 60, 20).contains("MISSING ANSWER"));
    }

    #[test]
    fn test_shows_existing_annotations() {
        let mut records = sample_records();
        records[1].classification = Some(Classification::HigherOrder);

        let mut card = QuestionCard {
            record: &records[1],
            mode: Mode::Classify,
            position: 2,
            total: 2,
        };
        assert!(
            render_to_string(&mut card, 60, 20)
                .contains("Current classification: higher order")
        );

        card.mode = Mode::Answer;
        assert!(render_to_string(&mut card, 60, 20).contains("Current answer: 7"));
    }

    #[test]
    fn test_long_text_wraps_without_panic() {
        let record = QuestionRecord::new("word ".repeat(200), vec!["x".repeat(500)]);
        let mut card = QuestionCard {
            record: &record,
            mode: Mode::Answer,
            position: 1,
            total: 1,
        };
        render_to_string(&mut card, 10, 3);
        render_to_string(&mut card, 1, 1);
    }
}
