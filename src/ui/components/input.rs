//! Text input component.
//!
//! A single-line text input with cursor movement, used for the search box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// A text input widget.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The current input value.
    value: String,
    /// Cursor position within the value, in bytes (ASCII input only moves
    /// one byte at a time; multibyte chars move by their encoded length).
    cursor: usize,
    /// Placeholder text shown when empty.
    placeholder: String,
}

impl TextInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            value,
            cursor,
            placeholder: String::new(),
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.value, self.cursor);
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                    true
                } else {
                    false
                }
            }
            (KeyCode::Delete, _) => {
                if self.cursor < self.value.len() {
                    let next = next_char_boundary(&self.value, self.cursor);
                    self.value.drain(self.cursor..next);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Left, _) => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.value, self.cursor);
                }
                false
            }
            (KeyCode::Right, _) => {
                if self.cursor < self.value.len() {
                    self.cursor = next_char_boundary(&self.value, self.cursor);
                }
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }

    /// Render the input in a bordered block.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let t = theme();
        let border_style = if focused {
            Style::default().fg(t.accent)
        } else {
            Style::default().fg(t.border)
        };

        let display = if self.value.is_empty() && !focused {
            Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(t.dim))
        } else {
            Paragraph::new(self.value.as_str()).style(Style::default().fg(t.fg))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title.to_string());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(display, inner);

        if focused {
            let cursor_col = self.value[..self.cursor].chars().count() as u16;
            frame.set_cursor_position(Position::new(inner.x + cursor_col, inner.y));
        }
    }
}

fn prev_char_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
