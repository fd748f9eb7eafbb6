//! The datatable widget.
//!
//! Renders a set of columns and rows as a paginated table with an optional
//! substring filter. All slicing and filtering is client-side over the rows
//! handed in at mount. The widget owns its [`ViewState`]; the host mirrors
//! it into a [`crate::state::ViewStateStore`] after every change so
//! re-mounting the same table key restores the previous view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row as TableRow, Table, TableState},
    Frame,
};
use tracing::debug;

use crate::model::{filter_rows, Column, Row};
use crate::state::ViewState;
use crate::ui::theme::theme;

/// Action emitted by the datatable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTableAction {
    /// An interactive row was activated; carries the row's interaction id.
    RowActivated(String),
}

/// A paginated, searchable datatable.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Identifier distinguishing this table in the view-state store.
    table_key: String,
    /// Ordered column descriptors.
    columns: Vec<Column>,
    /// All rows, unfiltered.
    rows: Vec<Row>,
    /// Current view state (page size, page, query).
    state: ViewState,
    /// Indices of rows matching the active query; `None` when no filter.
    filtered: Option<Vec<usize>>,
    /// Cursor position within the visible page.
    cursor: usize,
}

impl DataTable {
    /// Mount a table.
    ///
    /// `table_key` must be non-empty; `state` is the view state read from
    /// the store (defaults for a first mount). A restored non-empty query
    /// re-applies the filter immediately.
    pub fn new(
        table_key: impl Into<String>,
        columns: Vec<Column>,
        rows: Vec<Row>,
        state: ViewState,
    ) -> Self {
        let table_key = table_key.into();
        debug_assert!(!table_key.is_empty(), "table_key must be non-empty");

        // Pages are 1-based; a zero page would underflow the slice arithmetic
        let mut state = state;
        state.current_page = state.current_page.max(1);

        let filtered = if state.search_query.is_empty() {
            None
        } else {
            Some(filter_rows(&rows, &columns, &state.search_query))
        };

        debug!(
            table_key = %table_key,
            rows = rows.len(),
            page = state.current_page,
            "Mounting datatable"
        );

        Self {
            table_key,
            columns,
            rows,
            state,
            filtered,
            cursor: 0,
        }
    }

    /// The table identifier.
    pub fn table_key(&self) -> &str {
        &self.table_key
    }

    /// The current view state, for the host to mirror into the store.
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Number of rows after filtering.
    pub fn total(&self) -> usize {
        match &self.filtered {
            Some(indices) => indices.len(),
            None => self.rows.len(),
        }
    }

    /// Number of pages at the current page size.
    pub fn page_count(&self) -> usize {
        crate::ui::components::pagination::page_count(self.total(), self.state.items_per_page)
    }

    /// Indices (into the unfiltered rows) visible on the current page.
    ///
    /// A page past the end yields an empty slice; that is defined behavior,
    /// not an error.
    pub fn visible_indices(&self) -> Vec<usize> {
        let per_page = self.state.items_per_page;
        let start = (self.state.current_page - 1) * per_page;

        match &self.filtered {
            Some(indices) => indices.iter().skip(start).take(per_page).copied().collect(),
            None => {
                let end = (start + per_page).min(self.rows.len());
                if start >= end {
                    Vec::new()
                } else {
                    (start..end).collect()
                }
            }
        }
    }

    /// Rows visible on the current page.
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    /// The counter line under the table.
    pub fn counter_text(&self) -> String {
        let total = self.total();
        if total == 0 {
            return "No entries to show.".to_string();
        }
        let per_page = self.state.items_per_page;
        let from = (self.state.current_page - 1) * per_page + 1;
        let to = (self.state.current_page * per_page).min(total);
        format!("Showing {} to {} of {} entries.", from, to, total)
    }

    /// Navigate to a page.
    ///
    /// Pages past the end are accepted and render empty; zero clamps to 1.
    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page.max(1);
        self.cursor = 0;
    }

    /// Change the page size and reset to the first page.
    pub fn set_items_per_page(&mut self, size: usize) {
        self.state.items_per_page = size;
        self.state.current_page = 1;
        self.cursor = 0;
    }

    /// Apply a settled search query and reset to the first page.
    ///
    /// An empty query clears the filter and shows the unfiltered rows.
    pub fn apply_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.filtered = if query.is_empty() {
            None
        } else {
            Some(filter_rows(&self.rows, &self.columns, &query))
        };
        debug!(table_key = %self.table_key, query = %query, total = self.total(), "Filter applied");
        self.state.search_query = query;
        self.state.current_page = 1;
        self.cursor = 0;
    }

    /// Handle cursor movement and row activation.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DataTableAction> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let visible = self.visible_indices().len();
                if self.cursor + 1 < visible {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Enter => self.activate(),
            _ => None,
        }
    }

    /// Activate the cursor row, if it is interactive.
    pub fn activate(&mut self) -> Option<DataTableAction> {
        let index = *self.visible_indices().get(self.cursor)?;
        self.rows[index]
            .interaction_id()
            .map(|id| DataTableAction::RowActivated(id.to_string()))
    }

    /// Render the table with headers, body and cursor highlight.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let header = TableRow::new(
            self.columns
                .iter()
                .map(|c| Cell::from(c.label.clone()))
                .collect::<Vec<_>>(),
        )
        .style(t.header);

        let body: Vec<TableRow> = self
            .visible_rows()
            .into_iter()
            .map(|row| {
                let style = if row.is_active() {
                    t.active_row
                } else {
                    Style::default().fg(t.fg)
                };
                TableRow::new(
                    self.columns
                        .iter()
                        .map(|c| Cell::from(row.get(&c.key).to_string()))
                        .collect::<Vec<_>>(),
                )
                .style(style)
            })
            .collect();

        let width = if self.columns.is_empty() {
            100
        } else {
            (100 / self.columns.len()) as u16
        };
        let widths = vec![Constraint::Percentage(width); self.columns.len()];

        let table = Table::new(body, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(t.border)),
            )
            .highlight_style(t.cursor_row);

        let mut table_state = TableState::default();
        table_state.select(Some(self.cursor));

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn name_columns() -> Vec<Column> {
        vec![Column::new("name", "Name")]
    }

    fn people() -> Vec<Row> {
        vec![
            Row::new().cell("name", "Alice"),
            Row::new().cell("name", "Bob"),
            Row::new().cell("name", "Carol"),
        ]
    }

    fn mounted(items_per_page: usize) -> DataTable {
        let state = ViewState {
            items_per_page,
            ..ViewState::default()
        };
        DataTable::new("people", name_columns(), people(), state)
    }

    fn visible_names(table: &DataTable) -> Vec<String> {
        table
            .visible_rows()
            .iter()
            .map(|r| r.get("name").to_string())
            .collect()
    }

    #[test]
    fn test_first_page_slice() {
        let table = mounted(2);
        assert_eq!(visible_names(&table), vec!["Alice", "Bob"]);
        assert_eq!(table.counter_text(), "Showing 1 to 2 of 3 entries.");
    }

    #[test]
    fn test_last_page_slice() {
        let mut table = mounted(2);
        table.set_page(2);
        assert_eq!(visible_names(&table), vec!["Carol"]);
        assert_eq!(table.counter_text(), "Showing 3 to 3 of 3 entries.");
    }

    #[test]
    fn test_pages_partition_rows() {
        let table = mounted(2);
        let mut seen = 0;
        for page in 1..=table.page_count() {
            let mut t = table.clone();
            t.set_page(page);
            let on_page = t.visible_rows().len();
            assert!(on_page <= 2);
            seen += on_page;
        }
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let mut table = mounted(2);
        table.set_page(7);
        assert!(table.visible_rows().is_empty());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut table = mounted(2);
        table.set_page(2);
        table.set_items_per_page(10);
        assert_eq!(table.view_state().current_page, 1);
        assert_eq!(table.view_state().items_per_page, 10);
        assert_eq!(table.visible_rows().len(), 3);
    }

    #[test]
    fn test_search_filters_and_resets_page() {
        let mut table = mounted(2);
        table.set_page(2);
        table.apply_search("bo");
        assert_eq!(visible_names(&table), vec!["Bob"]);
        assert_eq!(table.total(), 1);
        assert_eq!(table.view_state().current_page, 1);
        assert_eq!(table.view_state().search_query, "bo");
    }

    #[test]
    fn test_clearing_search_restores_rows() {
        let mut table = mounted(10);
        table.apply_search("bo");
        table.apply_search("");
        assert_eq!(visible_names(&table), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(table.view_state().current_page, 1);
    }

    #[test]
    fn test_empty_table_counter() {
        let table = DataTable::new("empty", name_columns(), Vec::new(), ViewState::default());
        assert_eq!(table.counter_text(), "No entries to show.");
        assert_eq!(table.page_count(), 0);
    }

    #[test]
    fn test_restored_query_filters_on_mount() {
        let state = ViewState {
            search_query: "carol".to_string(),
            ..ViewState::default()
        };
        let table = DataTable::new("people", name_columns(), people(), state);
        assert_eq!(visible_names(&table), vec!["Carol"]);
        assert_eq!(table.total(), 1);
    }

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut table = mounted(2);
        table.handle_input(key(KeyCode::Char('j')));
        table.handle_input(key(KeyCode::Char('j')));
        table.handle_input(key(KeyCode::Char('j')));
        // Two rows on the page, cursor stays on the second
        assert_eq!(table.activate(), None);
        table.handle_input(key(KeyCode::Char('k')));
        table.handle_input(key(KeyCode::Char('k')));
        assert_eq!(table.activate(), None);
    }

    #[test]
    fn test_activation_emits_interaction_id() {
        let rows = vec![
            Row::new().cell("name", "Alice").interactive("user-1"),
            Row::new().cell("name", "Bob"),
        ];
        let mut table = DataTable::new("people", name_columns(), rows, ViewState::default());
        assert_eq!(
            table.handle_input(key(KeyCode::Enter)),
            Some(DataTableAction::RowActivated("user-1".to_string()))
        );

        // Non-interactive row activates to nothing
        table.handle_input(key(KeyCode::Char('j')));
        assert_eq!(table.handle_input(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_filtered_pagination() {
        let rows: Vec<Row> = (0..25)
            .map(|i| Row::new().cell("name", format!("row-{}", i)))
            .collect();
        let state = ViewState {
            items_per_page: 10,
            ..ViewState::default()
        };
        let mut table = DataTable::new("big", name_columns(), rows, state);

        // "row-1" matches row-1 and row-10..row-19: 11 rows over 2 pages
        table.apply_search("row-1");
        assert_eq!(table.total(), 11);
        assert_eq!(table.page_count(), 2);
        assert_eq!(table.visible_rows().len(), 10);
        table.set_page(2);
        assert_eq!(table.visible_rows().len(), 1);
        assert_eq!(table.counter_text(), "Showing 11 to 11 of 11 entries.");
    }
}
