//! Counter domain types
//!
//! This module defines the core data structures of the service:
//! - [`Counter`]: a named counter record owned by the store
//! - [`CounterEvent`]: audit records for all store mutations

mod counter;
mod event;

pub use counter::Counter;
pub use event::{CounterEvent, Operation};
