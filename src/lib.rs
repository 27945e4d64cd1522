//! fetchkit library
//!
//! A JSON API client with an in-memory response cache and bounded retries,
//! plus a small processor for filtering, sorting, and searching the fetched
//! collection.

pub mod app;
pub mod cache;
pub mod cli;
pub mod client;
pub mod data;
pub mod logging;
