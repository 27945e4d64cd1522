//! Cache module for storing API responses in memory
//!
//! This module provides a response cache that memoizes decoded JSON bodies by
//! endpoint for the lifetime of the client that owns it.

mod memory;

pub use memory::ResponseCache;
