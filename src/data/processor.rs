//! Filtering, sorting, searching, and display over a fetched collection
//!
//! The processor never does I/O on its input and never mutates it: every
//! operation returns a new sequence.

use std::cmp::Ordering;
use std::io::{self, Write};

use feruca::Collator;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::Item;

/// Errors that can occur while processing a collection
#[derive(Debug, Error)]
pub enum ProcessError {
    /// A record lacks a field an operation needed (or holds the wrong type)
    #[error("Item {index} is missing field '{field}'")]
    MissingField { field: &'static str, index: usize },

    /// The payload is not a JSON array
    #[error("Expected a JSON array of items, got {0}")]
    NotACollection(&'static str),

    /// The array could not be read as item records
    #[error("Failed to read items: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing display output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Holds one materialized collection of items
#[derive(Debug, Clone, Default)]
pub struct DataProcessor {
    items: Vec<Item>,
}

impl DataProcessor {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Builds a processor from a decoded response body
    ///
    /// # Returns
    /// * `Ok(DataProcessor)` if `value` is a JSON array (elements are not checked)
    /// * `Err(ProcessError::NotACollection)` otherwise
    pub fn from_value(value: Value) -> Result<Self, ProcessError> {
        match value {
            Value::Array(_) => Ok(Self::new(Vec::<Item>::deserialize(value)?)),
            other => Err(ProcessError::NotACollection(json_type_name(&other))),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Active items, ordered by name
    ///
    /// Every item's `active` flag is read; `name` is read for active items only.
    /// The sort is stable, so items with equal names keep their input order.
    pub fn process(&self) -> Result<Vec<Item>, ProcessError> {
        let mut active = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if require_active(item, index)? {
                let name = require_name(item, index)?;
                active.push((name, item));
            }
        }

        let mut collator = Collator::default();
        active.sort_by(|(a, _), (b, _)| collator.collate(*a, *b));

        Ok(active.into_iter().map(|(_, item)| item.clone()).collect())
    }

    /// Items whose name contains `query`, ignoring case, in input order
    ///
    /// An empty query matches every item. `active` is not consulted.
    pub fn search(&self, query: &str) -> Result<Vec<Item>, ProcessError> {
        let needle = query.to_lowercase();
        let mut matches = Vec::new();

        for (index, item) in self.items.iter().enumerate() {
            let name = require_name(item, index)?;
            if name.to_lowercase().contains(&needle) {
                matches.push(item.clone());
            }
        }

        Ok(matches)
    }

    /// Prints one line per item to stdout
    pub fn display(&self, items: &[Item]) -> Result<(), ProcessError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.display_to(&mut handle, items)
    }

    /// Writes one `Name: <name>, Active: <active>` line per item to `out`
    pub fn display_to<W: Write>(&self, out: &mut W, items: &[Item]) -> Result<(), ProcessError> {
        for (index, item) in items.iter().enumerate() {
            let name = require_name(item, index)?;
            let active = require_active(item, index)?;
            writeln!(out, "Name: {}, Active: {}", name, active)?;
        }
        Ok(())
    }
}

fn require_name(item: &Item, index: usize) -> Result<&str, ProcessError> {
    item.name().ok_or(ProcessError::MissingField {
        field: "name",
        index,
    })
}

fn require_active(item: &Item, index: usize) -> Result<bool, ProcessError> {
    item.active().ok_or(ProcessError::MissingField {
        field: "active",
        index,
    })
}

/// Collation-style name ordering
///
/// Unicode Collation Algorithm with the CLDR root table: accents and case only
/// break ties between otherwise equal names, and lowercase sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
