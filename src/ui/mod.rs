//! User interface components.
//!
//! All TUI rendering lives here: the datatable widget, its surrounding
//! controls, and theming.

pub mod components;
pub mod theme;

pub use components::{
    page_count, DataTable, DataTableAction, Dropdown, DropdownAction, OptionsAction, Pagination,
    PaginationAction, TableOptions, TextInput,
};
pub use theme::{init_theme, theme, Theme};
