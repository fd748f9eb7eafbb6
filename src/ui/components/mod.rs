//! Reusable UI components.

pub mod datatable;
pub mod dropdown;
pub mod input;
pub mod options;
pub mod pagination;

pub use datatable::{DataTable, DataTableAction};
pub use dropdown::{Dropdown, DropdownAction};
pub use input::TextInput;
pub use options::{OptionsAction, TableOptions};
pub use pagination::{page_count, Pagination, PaginationAction};
