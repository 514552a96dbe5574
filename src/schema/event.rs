//! Audit events for store mutations
//!
//! Every write to the counter store appends one immutable event, giving a
//! full trail of who changed what and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of store mutation an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Created,
    Incremented,
    Decremented,
    Deleted,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Created => write!(f, "created"),
            Operation::Incremented => write!(f, "incremented"),
            Operation::Decremented => write!(f, "decremented"),
            Operation::Deleted => write!(f, "deleted"),
        }
    }
}

/// One audit record in the store's append-only event log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterEvent {
    /// Monotonic sequence number assigned by the store
    pub seq: u64,
    /// What happened
    pub operation: Operation,
    /// Logical id of the affected counter
    pub my_id: String,
    /// Counter value after the operation
    pub value: i64,
    /// When it happened
    pub timestamp: DateTime<Utc>,
}

impl CounterEvent {
    pub fn new(seq: u64, operation: Operation, my_id: impl Into<String>, value: i64) -> Self {
        Self {
            seq,
            operation,
            my_id: my_id.into(),
            value,
            timestamp: Utc::now(),
        }
    }
}
