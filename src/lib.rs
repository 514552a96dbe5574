//! tally — a Relay-style GraphQL counter service
//!
//! Named counters live in a sled-backed [`store::SledStore`] and are exposed
//! through a Relay-flavored GraphQL schema: `counters(id?)` lookup, generic
//! `node(id)` resolution over opaque global ids, and `increment`/`decrement`
//! mutations that echo client mutation IDs.

pub mod graphql;
pub mod relay;
pub mod schema;
pub mod store;

pub use graphql::{build_schema, CounterSchema, MutationRoot, QueryRoot};
pub use relay::{from_global_id, to_global_id, GlobalIdError};
pub use schema::{Counter, CounterEvent, Operation};
pub use store::{SledStore, Store, StoreError};
