//! Dropdown component for selecting from a fixed list of choices.
//!
//! Used for the page-size selector. Collapsed it shows the selected value;
//! expanded it shows all choices with j/k and arrow-key navigation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// Action resulting from dropdown input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownAction {
    /// A choice was selected.
    Select(usize),
    /// The dropdown was closed without selection.
    Cancel,
}

/// A dropdown over numeric choices.
#[derive(Debug, Clone)]
pub struct Dropdown {
    /// Available choices.
    choices: Vec<usize>,
    /// Index of the currently selected choice.
    selected: usize,
    /// Index of the highlighted choice while expanded.
    highlighted: usize,
    /// Whether the dropdown is expanded.
    expanded: bool,
    /// Label shown next to the collapsed value.
    label: String,
}

impl Dropdown {
    /// Create a dropdown with the given label and choices.
    ///
    /// The initial selection is the first choice equal to `initial`, or the
    /// first choice if none matches.
    pub fn new(label: impl Into<String>, choices: Vec<usize>, initial: usize) -> Self {
        let selected = choices.iter().position(|&c| c == initial).unwrap_or(0);
        Self {
            choices,
            selected,
            highlighted: selected,
            expanded: false,
            label: label.into(),
        }
    }

    /// The currently selected choice.
    pub fn selected(&self) -> usize {
        self.choices.get(self.selected).copied().unwrap_or(0)
    }

    /// Select the first choice equal to `value`, if present.
    pub fn select_value(&mut self, value: usize) {
        if let Some(idx) = self.choices.iter().position(|&c| c == value) {
            self.selected = idx;
            self.highlighted = idx;
        }
    }

    /// Whether the dropdown is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expand the dropdown, starting the highlight at the selection.
    pub fn expand(&mut self) {
        self.expanded = true;
        self.highlighted = self.selected;
    }

    /// Collapse without changing the selection.
    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Handle keyboard input while expanded.
    ///
    /// Returns an action when the interaction finishes.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DropdownAction> {
        if !self.expanded {
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.highlighted > 0 {
                    self.highlighted -= 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.highlighted + 1 < self.choices.len() {
                    self.highlighted += 1;
                }
                None
            }
            KeyCode::Enter => {
                self.selected = self.highlighted;
                self.expanded = false;
                Some(DropdownAction::Select(self.selected()))
            }
            KeyCode::Esc => {
                self.expanded = false;
                Some(DropdownAction::Cancel)
            }
            _ => None,
        }
    }

    /// Render the collapsed field at `area`; when expanded, render the
    /// choice list as an overlay below it.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let style = if focused || self.expanded {
            Style::default().fg(t.accent)
        } else {
            Style::default().fg(t.dim)
        };

        let text = format!("{}: {} ▾", self.label, self.selected());
        frame.render_widget(Paragraph::new(text).style(style), area);

        if self.expanded {
            let height = self.choices.len() as u16 + 2;
            // Clamp to the frame so a short terminal cannot push the popup
            // out of bounds
            let popup = Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width.min(16),
                height,
            }
            .intersection(frame.area());
            if popup.is_empty() {
                return;
            }

            let items: Vec<ListItem> = self
                .choices
                .iter()
                .map(|c| ListItem::new(c.to_string()))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(t.accent)),
                )
                .highlight_style(
                    Style::default()
                        .fg(t.accent)
                        .add_modifier(Modifier::REVERSED),
                );

            let mut state = ListState::default();
            state.select(Some(self.highlighted));

            frame.render_widget(Clear, popup);
            frame.render_stateful_widget(list, popup, &mut state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page_sizes() -> Dropdown {
        Dropdown::new("Page size", vec![10, 25, 50, 100], 10)
    }

    #[test]
    fn test_initial_selection_matches_value() {
        let dropdown = Dropdown::new("Page size", vec![10, 25, 50], 25);
        assert_eq!(dropdown.selected(), 25);
    }

    #[test]
    fn test_initial_selection_falls_back_to_first() {
        let dropdown = Dropdown::new("Page size", vec![10, 25, 50], 7);
        assert_eq!(dropdown.selected(), 10);
    }

    #[test]
    fn test_collapsed_ignores_input() {
        let mut dropdown = page_sizes();
        assert_eq!(dropdown.handle_input(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_navigate_and_select() {
        let mut dropdown = page_sizes();
        dropdown.expand();
        dropdown.handle_input(key(KeyCode::Down));
        dropdown.handle_input(key(KeyCode::Char('j')));

        let action = dropdown.handle_input(key(KeyCode::Enter));
        assert_eq!(action, Some(DropdownAction::Select(50)));
        assert_eq!(dropdown.selected(), 50);
        assert!(!dropdown.is_expanded());
    }

    #[test]
    fn test_escape_cancels_without_changing_selection() {
        let mut dropdown = page_sizes();
        dropdown.expand();
        dropdown.handle_input(key(KeyCode::Down));

        let action = dropdown.handle_input(key(KeyCode::Esc));
        assert_eq!(action, Some(DropdownAction::Cancel));
        assert_eq!(dropdown.selected(), 10);
    }

    #[test]
    fn test_highlight_clamps_at_ends() {
        let mut dropdown = page_sizes();
        dropdown.expand();
        dropdown.handle_input(key(KeyCode::Up));
        assert_eq!(dropdown.handle_input(key(KeyCode::Enter)), Some(DropdownAction::Select(10)));
    }

    #[test]
    fn test_select_value() {
        let mut dropdown = page_sizes();
        dropdown.select_value(100);
        assert_eq!(dropdown.selected(), 100);
        dropdown.select_value(13);
        assert_eq!(dropdown.selected(), 100);
    }
}
