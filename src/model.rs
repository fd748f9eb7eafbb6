//! Column and row records for the datatable.
//!
//! A table is described by an ordered list of [`Column`]s and a list of
//! [`Row`]s. A row is an open mapping from column key to display string;
//! values are coerced to strings at ingestion so rendering and filtering
//! only ever deal with text.

use std::collections::HashMap;

use serde_json::Value;

/// A column descriptor: which row field to show and under what header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The row field this column displays.
    pub key: String,
    /// The header label.
    pub label: String,
}

impl Column {
    /// Create a new column descriptor.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Marks a row as interactive.
///
/// Instead of carrying a callback, an interactive row carries an opaque id
/// that the datatable emits when the row is activated. The host decides what
/// activation means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowInteraction {
    /// Identifier handed back to the host on activation.
    pub id: String,
}

impl RowInteraction {
    /// Create an interaction with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A single table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Cell values keyed by column key. Missing keys render as empty cells.
    cells: HashMap<String, String>,
    /// Whether the row is rendered with the active-row style.
    active: bool,
    /// Present when the row responds to activation.
    interaction: Option<RowInteraction>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: set a cell value.
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Builder-style: mark the row active.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Builder-style: make the row interactive with the given id.
    pub fn interactive(mut self, id: impl Into<String>) -> Self {
        self.interaction = Some(RowInteraction::new(id));
        self
    }

    /// Get the display value for a column key, empty if absent.
    pub fn get(&self, key: &str) -> &str {
        self.cells.get(key).map(String::as_str).unwrap_or("")
    }

    /// Whether the row carries the active-row style.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The interaction id, if the row is interactive.
    pub fn interaction_id(&self) -> Option<&str> {
        self.interaction.as_ref().map(|i| i.id.as_str())
    }

    /// Build a row from a JSON object, coercing every value to text.
    ///
    /// Strings are taken as-is; numbers, booleans and null use their display
    /// form; nested arrays/objects render as compact JSON. Non-object values
    /// yield an empty row.
    pub fn from_json(value: &Value) -> Self {
        let mut row = Row::new();
        if let Value::Object(map) = value {
            for (key, val) in map {
                row.cells.insert(key.clone(), coerce_to_string(val));
            }
        }
        row
    }
}

/// Coerce a JSON value to its cell display string.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Filter rows by a substring query over the declared columns.
///
/// Returns the indices of rows where at least one column's value contains
/// the query, case-insensitive. An empty query matches every row.
pub fn filter_rows(rows: &[Row], columns: &[Column], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let query_lower = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            columns
                .iter()
                .any(|c| row.get(&c.key).to_lowercase().contains(&query_lower))
        })
        .map(|(i, _)| i)
        .collect()
}
