//! Terminal keypad widget, mirroring the browser keypad layout.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{InputEvent, Operator};

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The on-screen label
    pub label: String,
    /// The input event this button fires
    pub event: InputEvent,
}

impl KeypadButton {
    /// Creates a button for an input event.
    #[must_use]
    pub fn new(event: InputEvent) -> Self {
        Self {
            label: event.label(),
            event,
        }
    }
}

/// The keypad grid. Layout:
/// ```text
/// [ C ] [ ⌫ ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
    active: Option<Operator>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let rows = vec![
            vec![
                KeypadButton::new(InputEvent::Clear),
                KeypadButton::new(InputEvent::Backspace),
                KeypadButton::new(InputEvent::Percent),
                KeypadButton::new(InputEvent::Operator(Operator::Divide)),
            ],
            vec![
                KeypadButton::new(InputEvent::Digit(7)),
                KeypadButton::new(InputEvent::Digit(8)),
                KeypadButton::new(InputEvent::Digit(9)),
                KeypadButton::new(InputEvent::Operator(Operator::Multiply)),
            ],
            vec![
                KeypadButton::new(InputEvent::Digit(4)),
                KeypadButton::new(InputEvent::Digit(5)),
                KeypadButton::new(InputEvent::Digit(6)),
                KeypadButton::new(InputEvent::Operator(Operator::Subtract)),
            ],
            vec![
                KeypadButton::new(InputEvent::Digit(1)),
                KeypadButton::new(InputEvent::Digit(2)),
                KeypadButton::new(InputEvent::Digit(3)),
                KeypadButton::new(InputEvent::Operator(Operator::Add)),
            ],
            vec![
                KeypadButton::new(InputEvent::Digit(0)),
                KeypadButton::new(InputEvent::Decimal),
                KeypadButton::new(InputEvent::Equals),
            ],
        ];
        Self { rows, active: None }
    }

    /// Button rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    /// Total number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by grid position.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Highlights an operator button (or clears the highlight).
    pub fn set_active(&mut self, op: Option<Operator>) {
        self.active = op;
    }

    /// The currently highlighted operator, if any.
    #[must_use]
    pub fn active(&self) -> Option<Operator> {
        self.active
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        if let InputEvent::Operator(op) = button.event {
            if self.keypad.active == Some(op) {
                return Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
            }
        }
        match button.event {
            InputEvent::Digit(_) | InputEvent::Decimal => Style::default().fg(Color::White),
            InputEvent::Operator(_) => Style::default().fg(Color::Yellow),
            InputEvent::Equals => Style::default().fg(Color::Green),
            InputEvent::Clear | InputEvent::Backspace => Style::default().fg(Color::Red),
            InputEvent::Percent => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let rows = self.keypad.rows();
        if inner.width < 4 || (inner.height as usize) < rows.len() {
            return; // too small to render
        }

        let btn_width = inner.width / 4;
        let btn_height = inner.height / rows.len() as u16;

        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, button) in row.iter().enumerate() {
                let x = inner.x + (col_idx as u16 * btn_width);
                let y = inner.y + (row_idx as u16 * btn_height) + btn_height / 2;

                if btn_width >= 3 && y < inner.y + inner.height {
                    let label = format!("[{}]", button.label);
                    let label_x = x + (btn_width.saturating_sub(label.chars().count() as u16)) / 2;
                    buf.set_span(
                        label_x,
                        y,
                        &Span::styled(label, self.button_style(button)),
                        btn_width,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Layout tests =====

    #[test]
    fn test_keypad_button_count() {
        assert_eq!(Keypad::new().button_count(), 19);
    }

    #[test]
    fn test_keypad_top_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(0, 0).unwrap().event, InputEvent::Clear);
        assert_eq!(
            keypad.button_at(0, 3).unwrap().event,
            InputEvent::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_keypad_short_last_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(4, 2).unwrap().event, InputEvent::Equals);
        assert!(keypad.button_at(4, 3).is_none());
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        assert!(Keypad::new().button_at(9, 9).is_none());
    }

    #[test]
    fn test_button_labels() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(1, 0).unwrap().label, "7");
        assert_eq!(keypad.button_at(0, 3).unwrap().label, "÷");
        assert_eq!(keypad.button_at(0, 1).unwrap().label, "⌫");
    }

    // ===== Highlight tests =====

    #[test]
    fn test_set_active() {
        let mut keypad = Keypad::new();
        assert!(keypad.active().is_none());
        keypad.set_active(Some(Operator::Add));
        assert_eq!(keypad.active(), Some(Operator::Add));
        keypad.set_active(None);
        assert!(keypad.active().is_none());
    }

    // ===== Widget tests =====

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 24, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[=]"));
        assert!(content.contains("[÷]"));
    }

    #[test]
    fn test_widget_render_too_small_is_safe() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 5, 4);
        let mut buf = Buffer::empty(area);
        // Should not panic, just draws the border
        KeypadWidget::new(&keypad).render(area, &mut buf);
    }
}
