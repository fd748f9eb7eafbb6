//! spicy-table: a paginated, searchable datatable widget for ratatui.
//!
//! The widget takes a set of [`model::Column`]s and [`model::Row`]s and
//! renders a table with client-side pagination and a debounced substring
//! search. View state (page size, current page, query) is kept per table
//! key in a [`state::ViewStateStore`] owned by the host, so re-mounting a
//! table with the same key restores its previous view.
//!
//! The crate also ships a demo binary that mounts the widget over built-in
//! sample data or a JSON file.

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod state;
pub mod ui;

pub use error::{AppError, Result};
pub use model::{filter_rows, Column, Row, RowInteraction};
pub use state::{ViewState, ViewStateStore};
pub use ui::{DataTable, DataTableAction, OptionsAction, Pagination, TableOptions};
