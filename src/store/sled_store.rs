//! sled-backed counter store

use super::{Store, StoreError};
use crate::schema::{Counter, CounterEvent, Operation};
use chrono::Utc;
use std::path::Path;

const COUNTERS_TREE: &str = "counters";
const EVENTS_TREE: &str = "events";

/// Persistent counter store on top of sled.
///
/// Counters live in one tree keyed by `my_id`, audit events in another
/// keyed by a big-endian monotonic sequence number so iteration order is
/// chronological.
pub struct SledStore {
    db: sled::Db,
    counters: sled::Tree,
    events: sled::Tree,
}

impl SledStore {
    /// Open (or create) a store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// In-memory store for tests
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self, StoreError> {
        let counters = db.open_tree(COUNTERS_TREE)?;
        let events = db.open_tree(EVENTS_TREE)?;
        Ok(Self { db, counters, events })
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    fn put_counter(&self, counter: &Counter) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(counter)?;
        self.counters.insert(counter.my_id.as_bytes(), bytes)?;
        Ok(())
    }

    fn log_event(&self, operation: Operation, my_id: &str, value: i64) -> Result<(), StoreError> {
        let seq = self.db.generate_id()?;
        let event = CounterEvent::new(seq, operation, my_id, value);
        let bytes = serde_json::to_vec(&event)?;
        self.events.insert(seq.to_be_bytes(), bytes)?;
        Ok(())
    }

    /// Apply `delta` to the matching counter. Unknown ids no-op.
    fn adjust(&self, my_id: &str, delta: i64) -> Result<Vec<Counter>, StoreError> {
        if let Some(mut counter) = self.get_counter(my_id)? {
            counter.value += delta;
            counter.updated_at = Utc::now();
            self.put_counter(&counter)?;
            let operation = if delta >= 0 {
                Operation::Incremented
            } else {
                Operation::Decremented
            };
            self.log_event(operation, my_id, counter.value)?;
        }
        self.get_counters()
    }
}

impl Store for SledStore {
    fn get_counter(&self, my_id: &str) -> Result<Option<Counter>, StoreError> {
        match self.counters.get(my_id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn get_counters(&self) -> Result<Vec<Counter>, StoreError> {
        let mut all = Vec::new();
        for entry in self.counters.iter() {
            let (_, bytes) = entry?;
            all.push(serde_json::from_slice(&bytes)?);
        }
        Ok(all)
    }

    fn increment_counter(&self, my_id: &str) -> Result<Vec<Counter>, StoreError> {
        self.adjust(my_id, 1)
    }

    fn decrement_counter(&self, my_id: &str) -> Result<Vec<Counter>, StoreError> {
        self.adjust(my_id, -1)
    }

    fn create_counter(&self, my_id: &str) -> Result<Counter, StoreError> {
        if self.counters.contains_key(my_id.as_bytes())? {
            return Err(StoreError::AlreadyExists(my_id.to_string()));
        }
        let counter = Counter::new(my_id);
        self.put_counter(&counter)?;
        self.log_event(Operation::Created, my_id, counter.value)?;
        Ok(counter)
    }

    fn delete_counter(&self, my_id: &str) -> Result<(), StoreError> {
        match self.counters.remove(my_id.as_bytes())? {
            Some(bytes) => {
                let counter: Counter = serde_json::from_slice(&bytes)?;
                self.log_event(Operation::Deleted, my_id, counter.value)?;
                Ok(())
            }
            None => Err(StoreError::NotFound(my_id.to_string())),
        }
    }

    fn get_events(&self, limit: usize) -> Result<Vec<CounterEvent>, StoreError> {
        let mut events = Vec::new();
        for entry in self.events.iter().rev().take(limit) {
            let (_, bytes) = entry?;
            events.push(serde_json::from_slice(&bytes)?);
        }
        Ok(events)
    }
}
