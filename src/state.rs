//! Per-table view state and its in-memory store.
//!
//! Each mounted table is identified by a caller-chosen key. The store keeps
//! the view state (page size, current page, search query) for every key it
//! has seen, so re-mounting a table with the same key restores the previous
//! view. The store is a plain value owned by the host; it is created and
//! dropped explicitly and nothing here is process-global.

use std::collections::HashMap;

/// Default number of rows per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// The mutable view state of one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Rows shown per page.
    pub items_per_page: usize,
    /// The active page, 1-based.
    pub current_page: usize,
    /// The committed search query (empty means no filter).
    pub search_query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            current_page: 1,
            search_query: String::new(),
        }
    }
}

/// In-memory store mapping table keys to their [`ViewState`].
///
/// Reads of unknown keys yield defaults rather than errors; writes establish
/// a default entry first. State lives only as long as the store value.
#[derive(Debug, Default)]
pub struct ViewStateStore {
    states: HashMap<String, ViewState>,
}

impl ViewStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the view state for a table key, defaults if the key is unknown.
    pub fn get(&self, key: &str) -> ViewState {
        self.states.get(key).cloned().unwrap_or_default()
    }

    /// Mutate the view state for a table key, creating a default entry if
    /// the key is unknown.
    pub fn update<F>(&mut self, key: &str, f: F)
    where
        F: FnOnce(&mut ViewState),
    {
        let state = self.states.entry(key.to_string()).or_default();
        f(state);
    }

    /// Whether the store has state for a table key.
    pub fn contains(&self, key: &str) -> bool {
        self.states.contains_key(key)
    }

    /// Replace the stored state for a table key.
    pub fn set(&mut self, key: &str, state: ViewState) {
        self.states.insert(key.to_string(), state);
    }

    /// Drop the stored state for a table key.
    pub fn remove(&mut self, key: &str) -> Option<ViewState> {
        self.states.remove(key)
    }

    /// Drop all stored state.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Number of tables with stored state.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the store holds no state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
