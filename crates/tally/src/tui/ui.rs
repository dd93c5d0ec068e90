//! Terminal rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the UI widget, with the keypad highlight following the
    /// pending operator.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        let mut keypad = Keypad::new();
        let engine = app.engine();
        if engine.next_input_resets() {
            keypad.set_active(engine.pending_op());
        }
        Self { app, keypad }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" tally ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if inner.height < 2 {
            return;
        }

        let readout = self.app.readout();

        let secondary = Paragraph::new(readout.secondary)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        secondary.render(Rect { height: 1, ..inner }, buf);

        let primary_style = if readout.error {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let primary = Paragraph::new(readout.primary)
            .alignment(Alignment::Right)
            .style(primary_style);
        primary.render(
            Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            },
            buf,
        );
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // displays
                Constraint::Min(7),     // keypad
                Constraint::Length(1),  // help line
            ])
            .split(area);

        self.render_display(chunks[0], buf);
        KeypadWidget::new(&self.keypad).render(chunks[1], buf);

        Paragraph::new("0-9 . + - * / enter digits  |  Enter =  |  Esc clear  |  % percent  |  q quit")
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InputEvent, Operator};

    fn render_to_string(app: &CalculatorApp) -> String {
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        CalculatorUI::new(app).render(area, &mut buf);
        buf.content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_initial_state() {
        let app = CalculatorApp::new();
        let content = render_to_string(&app);
        assert!(content.contains("tally"));
        assert!(content.contains('0'));
        assert!(content.contains("[7]"));
        assert!(content.contains("quit"));
    }

    #[test]
    fn test_render_shows_entered_digits() {
        let mut app = CalculatorApp::new();
        app.press(InputEvent::Digit(4));
        app.press(InputEvent::Digit(2));
        assert!(render_to_string(&app).contains("42"));
    }

    #[test]
    fn test_render_shows_pending_expression() {
        let mut app = CalculatorApp::new();
        app.press(InputEvent::Digit(3));
        app.press(InputEvent::Operator(Operator::Add));
        assert!(render_to_string(&app).contains("3 +"));
    }

    #[test]
    fn test_render_shows_error_marker() {
        let mut app = CalculatorApp::new();
        for event in [
            InputEvent::Digit(8),
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit(0),
            InputEvent::Equals,
        ] {
            app.press(event);
        }
        assert!(render_to_string(&app).contains("Division by zero"));
    }

    #[test]
    fn test_render_small_area_is_safe() {
        let app = CalculatorApp::new();
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        CalculatorUI::new(&app).render(area, &mut buf);
    }

    #[test]
    fn test_keypad_highlight_follows_pending_operator() {
        let mut app = CalculatorApp::new();
        app.press(InputEvent::Digit(3));
        app.press(InputEvent::Operator(Operator::Multiply));
        let ui = CalculatorUI::new(&app);
        assert_eq!(ui.keypad.active(), Some(Operator::Multiply));

        // Entering the second operand clears the highlight
        app.press(InputEvent::Digit(4));
        let ui = CalculatorUI::new(&app);
        assert!(ui.keypad.active().is_none());
    }
}
