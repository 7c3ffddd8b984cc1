use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Stylize;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::Mode;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ProgressBar, QuestionCard, StatusBar};

/// Draw one frame from the session state. Pure read of `App`.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min, Percentage};
    let [status_area, main_area, gauge_area] =
        Layout::vertical([Length(1), Min(1), Length(2)]).areas(frame.area());
    let [card_area, help_area] =
        Layout::horizontal([Percentage(60), Percentage(40)]).areas(main_area);

    let file_name = app
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.path.display().to_string());

    let mut status_bar = StatusBar {
        file_name,
        mode: app.mode,
        dirty: app.dirty,
        status_message: app.status_message.clone(),
    };
    status_bar.render(frame, status_area);

    let mut question_card = QuestionCard {
        record: app.current(),
        mode: app.mode,
        position: app.cursor + 1,
        total: app.records.len(),
    };
    question_card.render(frame, card_area);

    draw_instructions(frame, help_area, app.mode);

    let mut progress_bar = ProgressBar {
        reviewed: app.reviewed_count(),
        total: app.records.len(),
        mode: app.mode,
    };
    progress_bar.render(frame, gauge_area);
}

/// Side panel explaining what the current mode records.
fn draw_instructions(frame: &mut Frame, area: Rect, mode: Mode) {
    let lines = match mode {
        Mode::Classify => vec![
            Line::from("Is this a higher order question?".bold()),
            Line::from(""),
            Line::from("Higher order: involves application, analyzing, evaluating."),
            Line::from("Lower order: involves basic understanding and rote memorization."),
            Line::from(""),
            Line::from("Press y for higher order, n for lower order."),
        ],
        Mode::Answer => vec![
            Line::from("What is the correct answer?".bold()),
            Line::from(""),
            Line::from("Press the option number (1-9) to record the answer."),
        ],
    };

    let panel = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::new()
                .borders(Borders::TOP | Borders::LEFT)
                .padding(Padding::new(1, 1, 1, 1)),
        );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::test_support::test_app;

    fn draw_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_answer_mode() {
        let app = test_app(Mode::Answer);
        let text = draw_to_string(&app, 100, 24);
        assert!(text.contains("Question 1 of 2"));
        assert!(text.contains("What is the capital of France?"));
        assert!(text.contains("What is the correct answer?"));
        assert!(text.contains("Answered 1/2"));
    }

    #[test]
    fn test_draw_classify_mode() {
        let app = test_app(Mode::Classify);
        let text = draw_to_string(&app, 100, 24);
        assert!(text.contains("[classify]"));
        assert!(text.contains("Is this a higher order question?"));
        assert!(text.contains("Classified 0/2"));
    }

    #[test]
    fn test_draw_reflects_cursor_and_status() {
        let mut app = test_app(Mode::Answer);
        app.advance();
        app.status_message = "Progress saved at 09:00:00".to_string();
        let text = draw_to_string(&app, 100, 24);
        assert!(text.contains("Question 2 of 2"));
        assert!(text.contains("Progress saved at 09:00:00"));
    }

    #[test]
    fn test_draw_survives_tiny_terminals() {
        let app = test_app(Mode::Classify);
        draw_to_string(&app, 5, 3);
        draw_to_string(&app, 1, 1);
        draw_to_string(&app, 80, 4);
    }
}
