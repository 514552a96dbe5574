//! Counter persistence
//!
//! The GraphQL layer depends only on the [`Store`] trait; [`SledStore`] is
//! the sled-backed implementation. Counter lifecycle (create/delete) lives
//! entirely here and is never exposed over GraphQL.

mod sled_store;

pub use sled_store::SledStore;

use crate::schema::{Counter, CounterEvent};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sled::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("counter already exists: {0}")]
    AlreadyExists(String),
    #[error("counter not found: {0}")]
    NotFound(String),
}

/// Narrow data-access interface consumed by the GraphQL layer.
///
/// `increment_counter`/`decrement_counter` return the post-mutation state
/// of the whole collection; a mutation on an unknown `my_id` is a silent
/// no-op. Values are not clamped and may go negative.
pub trait Store: Send + Sync {
    /// Fetch one counter by its logical id
    fn get_counter(&self, my_id: &str) -> Result<Option<Counter>, StoreError>;

    /// Fetch all counters, ordered by logical id
    fn get_counters(&self) -> Result<Vec<Counter>, StoreError>;

    /// Add one to the matching counter, then return all counters
    fn increment_counter(&self, my_id: &str) -> Result<Vec<Counter>, StoreError>;

    /// Subtract one from the matching counter, then return all counters
    fn decrement_counter(&self, my_id: &str) -> Result<Vec<Counter>, StoreError>;

    /// Register a new counter starting at zero
    fn create_counter(&self, my_id: &str) -> Result<Counter, StoreError>;

    /// Remove a counter
    fn delete_counter(&self, my_id: &str) -> Result<(), StoreError>;

    /// Most recent audit events, newest first
    fn get_events(&self, limit: usize) -> Result<Vec<CounterEvent>, StoreError>;
}
