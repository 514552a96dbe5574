//! GraphQL API for the counter store
//!
//! Relay-flavored schema surface:
//! - [`QueryRoot`]: `counters(id?)` lookup and generic `node(id)` resolution
//! - [`MutationRoot`]: `increment`/`decrement` with client mutation IDs

mod query;
mod mutation;
mod types;

pub use query::QueryRoot;
pub use mutation::MutationRoot;
pub use types::*;

use crate::store::SledStore;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

pub type CounterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store injected as context data
pub fn build_schema(store: Arc<SledStore>) -> CounterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
