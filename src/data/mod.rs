//! Item records and the collection processor
//!
//! Payloads are kept as raw JSON. Fields are looked up when an operation first
//! needs them, so a record missing `name` or `active` only fails the operations
//! that actually read it.

pub mod processor;

pub use processor::{DataProcessor, ProcessError};

use serde::Deserialize;
use serde_json::Value;

/// A single record from a collection endpoint
///
/// Only `name` (string) and `active` (boolean) are ever read. Any other fields
/// are carried along untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Item(Value);

impl Item {
    pub fn new(value: Value) -> Self {
        Item(value)
    }

    /// The record's `name`, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The record's `active` flag, if present and a boolean
    pub fn active(&self) -> Option<bool> {
        self.0.get("active").and_then(Value::as_bool)
    }

    /// The underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Item(value)
    }
}
