//! Table options bar: page-size selector and debounced search box.
//!
//! Keystrokes in the search box reschedule a debouncer instead of filtering
//! immediately; the host polls [`TableOptions::on_tick`] from the event-loop
//! tick and receives the raw query once the quiet period has elapsed.
//! Page-size changes are emitted immediately.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::debounce::Debouncer;
use crate::ui::components::dropdown::{Dropdown, DropdownAction};
use crate::ui::components::input::TextInput;

/// Action emitted by the options bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsAction {
    /// The page size changed.
    PageSize(usize),
    /// The search query settled (debounce fired or was committed).
    Search(String),
}

/// The options bar above a datatable.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Page-size selector.
    page_size: Dropdown,
    /// Search text input.
    search: TextInput,
    /// Debounce for search keystrokes.
    debouncer: Debouncer,
    /// Whether the search input has focus.
    searching: bool,
}

impl TableOptions {
    /// Create an options bar.
    pub fn new(choices: Vec<usize>, initial_page_size: usize, debounce: Duration) -> Self {
        let mut search = TextInput::new();
        search.set_placeholder("Press / to search");
        Self {
            page_size: Dropdown::new("Page size", choices, initial_page_size),
            search,
            debouncer: Debouncer::new(debounce),
            searching: false,
        }
    }

    /// Restore the search box contents without scheduling a filter pass.
    ///
    /// Used when mounting a table whose view state carries a saved query.
    pub fn restore_query(&mut self, query: &str) {
        self.search.set_value(query);
    }

    /// Restore the page-size selection.
    pub fn restore_page_size(&mut self, size: usize) {
        self.page_size.select_value(size);
    }

    /// The current (possibly not yet committed) search text.
    pub fn query(&self) -> &str {
        self.search.value()
    }

    /// Whether the search input has focus.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Focus the search input.
    pub fn begin_search(&mut self) {
        self.searching = true;
    }

    /// Whether the page-size dropdown is expanded.
    pub fn is_page_size_open(&self) -> bool {
        self.page_size.is_expanded()
    }

    /// Expand the page-size dropdown.
    pub fn open_page_size(&mut self) {
        self.page_size.expand();
    }

    /// Handle keyboard input while the options bar has focus.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<OptionsAction> {
        if self.page_size.is_expanded() {
            return match self.page_size.handle_input(key)? {
                DropdownAction::Select(size) => Some(OptionsAction::PageSize(size)),
                DropdownAction::Cancel => None,
            };
        }

        if self.searching {
            match key.code {
                KeyCode::Esc => {
                    // Leave search mode; a pending debounce still fires so
                    // the typed text is not lost
                    self.searching = false;
                    None
                }
                KeyCode::Enter => {
                    // Commit immediately instead of waiting out the delay
                    self.searching = false;
                    self.debouncer.cancel();
                    Some(OptionsAction::Search(self.search.value().to_string()))
                }
                _ => {
                    if self.search.handle_input(key) {
                        self.debouncer.schedule();
                    }
                    None
                }
            }
        } else {
            None
        }
    }

    /// Advance time: fire the debounced search if its deadline has passed.
    pub fn on_tick(&mut self) -> Option<OptionsAction> {
        if self.debouncer.poll() {
            Some(OptionsAction::Search(self.search.value().to_string()))
        } else {
            None
        }
    }

    /// Render the options bar: dropdown on the left, search on the right.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(20)])
            .split(area);

        let dropdown_area = Rect {
            y: chunks[0].y + 1,
            height: 1,
            ..chunks[0]
        };
        self.page_size.render(frame, dropdown_area, false);
        self.search
            .render(frame, chunks[1], "Search", self.searching);
    }
}
