//! Main application state and event loop handling for the demo binary.
//!
//! The app mounts one datatable at a time over a named dataset. All mounted
//! tables share a single [`ViewStateStore`], so switching datasets and
//! coming back restores the previous page, page size and query.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info};

use crate::config::Settings;
use crate::events::Event;
use crate::model::{Column, Row};
use crate::state::{ViewState, ViewStateStore};
use crate::ui::theme::theme;
use crate::ui::{
    DataTable, DataTableAction, OptionsAction, Pagination, PaginationAction, TableOptions,
};

/// A dataset the demo can mount as a table.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Table identifier used in the view-state store.
    pub key: String,
    /// Title shown in the tab bar.
    pub title: String,
    /// Column descriptors.
    pub columns: Vec<Column>,
    /// Row records.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Load a dataset from a JSON file holding an array of flat objects.
    ///
    /// Columns are derived from the keys of the first object; the column key
    /// doubles as the header label. The file stem becomes the table key.
    pub fn from_json_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| crate::error::AppError::data(format!("invalid JSON: {}", e)))?;

        let items = value
            .as_array()
            .ok_or_else(|| crate::error::AppError::data("expected a JSON array of objects"))?;

        let columns = items
            .first()
            .and_then(|v| v.as_object())
            .map(|obj| {
                obj.keys()
                    .map(|k| Column::new(k.clone(), k.clone()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let rows = items.iter().map(Row::from_json).collect();

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("table")
            .to_string();

        Ok(Self {
            key: format!("file.{}", stem),
            title: stem,
            columns,
            rows,
        })
    }
}

/// The main application struct that holds all state.
pub struct App {
    /// Application settings.
    settings: Settings,
    /// Shared view-state store for all datasets.
    store: ViewStateStore,
    /// Datasets available in the tab bar.
    datasets: Vec<Dataset>,
    /// Index of the mounted dataset.
    current: usize,
    /// The mounted datatable.
    table: DataTable,
    /// The options bar for the mounted table.
    options: TableOptions,
    /// Transient status message (e.g. after a row activation).
    status: Option<String>,
    /// Whether the application should quit.
    should_quit: bool,
}

impl App {
    /// Create the app over the given datasets.
    ///
    /// Panics if `datasets` is empty; the binary always supplies at least
    /// the built-in sample data.
    pub fn new(settings: Settings, datasets: Vec<Dataset>) -> Self {
        assert!(!datasets.is_empty(), "at least one dataset is required");

        let mut store = ViewStateStore::new();
        let (table, options) = Self::mount(&settings, &mut store, &datasets[0]);

        Self {
            settings,
            store,
            datasets,
            current: 0,
            table,
            options,
            status: None,
            should_quit: false,
        }
    }

    /// Build the widget pair for a dataset from its stored view state.
    fn mount(
        settings: &Settings,
        store: &mut ViewStateStore,
        dataset: &Dataset,
    ) -> (DataTable, TableOptions) {
        let state = if store.contains(&dataset.key) {
            store.get(&dataset.key)
        } else {
            // First mount: seed the page size from settings
            ViewState {
                items_per_page: settings.default_page_size,
                ..ViewState::default()
            }
        };

        let mut options = TableOptions::new(
            settings.page_size_choices.clone(),
            state.items_per_page,
            std::time::Duration::from_millis(settings.search_debounce_ms),
        );
        options.restore_query(&state.search_query);
        options.restore_page_size(state.items_per_page);

        let table = DataTable::new(
            dataset.key.clone(),
            dataset.columns.clone(),
            dataset.rows.clone(),
            state,
        );

        (table, options)
    }

    /// Mirror the mounted table's view state into the store.
    fn sync_store(&mut self) {
        self.store
            .set(self.table.table_key(), self.table.view_state().clone());
    }

    /// Switch to the next dataset, persisting the current view state.
    fn next_dataset(&mut self) {
        self.sync_store();
        self.current = (self.current + 1) % self.datasets.len();
        let (table, options) =
            Self::mount(&self.settings, &mut self.store, &self.datasets[self.current]);
        self.table = table;
        self.options = options;
        self.status = None;
        info!(dataset = %self.datasets[self.current].key, "Switched dataset");
    }

    /// Whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The mounted datatable.
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    /// The view-state store.
    pub fn store(&self) -> &ViewStateStore {
        &self.store
    }

    /// The current status line, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Handle one application event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.on_tick(),
            Event::Resize(_, _) => {}
        }
    }

    /// Advance time-based behavior (the search debounce).
    fn on_tick(&mut self) {
        if let Some(action) = self.options.on_tick() {
            self.apply_options_action(action);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Focused controls get the key first
        if self.options.is_searching() || self.options.is_page_size_open() {
            if let Some(action) = self.options.handle_input(key) {
                self.apply_options_action(action);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => self.next_dataset(),
            KeyCode::Char('/') => self.options.begin_search(),
            KeyCode::Char('s') => self.options.open_page_size(),
            KeyCode::Esc => self.status = None,
            KeyCode::Down | KeyCode::Up | KeyCode::Char('j') | KeyCode::Char('k')
            | KeyCode::Enter => {
                if let Some(DataTableAction::RowActivated(id)) = self.table.handle_input(key) {
                    info!(id = %id, "Row activated");
                    self.status = Some(format!("Activated: {}", id));
                }
            }
            _ => {
                let pagination = self.pagination();
                if let Some(PaginationAction::Page(page)) = pagination.handle_input(key) {
                    self.table.set_page(page);
                    self.sync_store();
                }
            }
        }
    }

    fn apply_options_action(&mut self, action: OptionsAction) {
        match action {
            OptionsAction::PageSize(size) => {
                debug!(size, "Page size changed");
                self.table.set_items_per_page(size);
            }
            OptionsAction::Search(query) => {
                self.table.apply_search(query);
            }
        }
        self.sync_store();
    }

    fn pagination(&self) -> Pagination {
        Pagination::new(
            self.table.total(),
            self.table.view_state().items_per_page,
            self.table.view_state().current_page,
        )
    }

    /// Render the full frame.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // tab bar
                Constraint::Length(3), // options
                Constraint::Min(4),    // table
                Constraint::Length(1), // counter / status
                Constraint::Length(1), // pagination
                Constraint::Length(1), // help
            ])
            .split(frame.area());

        self.render_tabs(frame, chunks[0]);
        self.options.render(frame, chunks[1]);
        self.table.render(frame, chunks[2]);
        self.render_counter(frame, chunks[3]);
        self.pagination().render(frame, chunks[4]);
        self.render_help(frame, chunks[5]);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut spans: Vec<Span> = Vec::new();
        for (i, dataset) in self.datasets.iter().enumerate() {
            let style = if i == self.current {
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.dim)
            };
            spans.push(Span::styled(format!(" {} ", dataset.title), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_counter(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let text = match &self.status {
            Some(status) => status.clone(),
            None => self.table.counter_text(),
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(t.dim)),
            area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let hints =
            "[Tab] dataset  [/] search  [s] page size  [h/l] page  [j/k] row  [Enter] open  [q] quit";
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(t.dim)),
            area,
        );
    }
}

/// The built-in sample datasets.
pub fn sample_datasets() -> Vec<Dataset> {
    let employee_columns = vec![
        Column::new("name", "Name"),
        Column::new("role", "Role"),
        Column::new("city", "City"),
    ];
    let employees = [
        ("Alice Turner", "Engineer", "Berlin"),
        ("Bob Marsh", "Designer", "Lisbon"),
        ("Carol Deng", "Engineer", "Taipei"),
        ("Dan Okafor", "Manager", "Lagos"),
        ("Eve Lindqvist", "Engineer", "Stockholm"),
        ("Frank Ruiz", "Support", "Madrid"),
        ("Grace Chen", "Designer", "Taipei"),
        ("Hugo Petit", "Engineer", "Lyon"),
        ("Ines Moreau", "Manager", "Paris"),
        ("Jonas Weber", "Engineer", "Hamburg"),
        ("Kira Novak", "Support", "Prague"),
        ("Leo Costa", "Engineer", "Porto"),
    ];
    let employee_rows = employees
        .iter()
        .enumerate()
        .map(|(i, (name, role, city))| {
            let row = Row::new()
                .cell("name", *name)
                .cell("role", *role)
                .cell("city", *city)
                .interactive(format!("employee-{}", i + 1));
            if *role == "Manager" {
                row.active()
            } else {
                row
            }
        })
        .collect();

    let task_columns = vec![
        Column::new("title", "Title"),
        Column::new("status", "Status"),
        Column::new("owner", "Owner"),
    ];
    let tasks = [
        ("Migrate build pipeline", "In Progress", "Alice"),
        ("Fix login redirect", "Open", "Bob"),
        ("Write onboarding docs", "Done", "Carol"),
        ("Upgrade database", "Open", "Dan"),
        ("Refresh landing page", "In Progress", "Grace"),
        ("Audit dependencies", "Open", "Hugo"),
        ("Rotate API keys", "Done", "Eve"),
        ("Profile slow queries", "Open", "Leo"),
    ];
    let task_rows = tasks
        .iter()
        .map(|(title, status, owner)| {
            Row::new()
                .cell("title", *title)
                .cell("status", *status)
                .cell("owner", *owner)
        })
        .collect();

    vec![
        Dataset {
            key: "demo.employees".to_string(),
            title: "Employees".to_string(),
            columns: employee_columns,
            rows: employee_rows,
        },
        Dataset {
            key: "demo.tasks".to_string(),
            title: "Tasks".to_string(),
            columns: task_columns,
            rows: task_rows,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Settings::default(), sample_datasets())
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_event(Event::Key(key(KeyCode::Char('q'))));
        assert!(app.should_quit());
    }

    #[test]
    fn test_initial_page_size_from_settings() {
        let settings = Settings {
            default_page_size: 5,
            ..Settings::default()
        };
        let app = App::new(settings, sample_datasets());
        assert_eq!(app.table().view_state().items_per_page, 5);
        assert_eq!(app.table().visible_rows().len(), 5);
    }

    #[test]
    fn test_page_navigation_persists_to_store() {
        let mut app = app();
        app.handle_event(Event::Key(key(KeyCode::Right)));
        assert_eq!(app.table().view_state().current_page, 2);
        assert_eq!(app.store().get("demo.employees").current_page, 2);
    }

    #[test]
    fn test_dataset_switch_restores_view_state() {
        let mut app = app();
        app.handle_event(Event::Key(key(KeyCode::Right)));
        assert_eq!(app.table().view_state().current_page, 2);

        // Away and back again
        app.handle_event(Event::Key(key(KeyCode::Tab)));
        assert_eq!(app.table().table_key(), "demo.tasks");
        assert_eq!(app.table().view_state().current_page, 1);

        app.handle_event(Event::Key(key(KeyCode::Tab)));
        assert_eq!(app.table().table_key(), "demo.employees");
        assert_eq!(app.table().view_state().current_page, 2);
    }

    #[test]
    fn test_search_flow_filters_table() {
        let mut app = app();
        app.handle_event(Event::Key(key(KeyCode::Char('/'))));
        for c in "turner".chars() {
            app.handle_event(Event::Key(key(KeyCode::Char(c))));
        }
        // Commit immediately rather than waiting out the debounce
        app.handle_event(Event::Key(key(KeyCode::Enter)));

        assert_eq!(app.table().total(), 1);
        assert_eq!(app.table().view_state().search_query, "turner");
        assert_eq!(app.store().get("demo.employees").search_query, "turner");
    }

    #[test]
    fn test_page_size_flow_resets_page() {
        let mut app = app();
        app.handle_event(Event::Key(key(KeyCode::Right)));
        app.handle_event(Event::Key(key(KeyCode::Char('s'))));
        app.handle_event(Event::Key(key(KeyCode::Down)));
        app.handle_event(Event::Key(key(KeyCode::Enter)));

        assert_eq!(app.table().view_state().items_per_page, 25);
        assert_eq!(app.table().view_state().current_page, 1);
    }

    #[test]
    fn test_dataset_from_json_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Alice", "age": 30}}, {{"name": "Bob", "age": 25}}]"#
        )
        .unwrap();

        let dataset = Dataset::from_json_file(file.path()).unwrap();
        assert_eq!(dataset.columns.len(), 2);
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.rows[0].get("name"), "Alice");
        assert_eq!(dataset.rows[1].get("age"), "25");
    }

    #[test]
    fn test_dataset_from_json_rejects_non_array() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Alice"}}"#).unwrap();
        assert!(Dataset::from_json_file(file.path()).is_err());
    }

    #[test]
    fn test_row_activation_sets_status() {
        let mut app = app();
        app.handle_event(Event::Key(key(KeyCode::Enter)));
        assert_eq!(app.status(), Some("Activated: employee-1"));

        app.handle_event(Event::Key(key(KeyCode::Esc)));
        assert_eq!(app.status(), None);
    }
}
