//! GraphQL object, interface, and payload types

use async_graphql::{Context, InputObject, Interface, Object, Result, SimpleObject, ID};
use std::sync::Arc;

use crate::relay;
use crate::schema::Counter;
use crate::store::{SledStore, Store};

/// GraphQL type name of [`Count`], used in global ids
pub const COUNT_TYPE_NAME: &str = "Count";

/// GraphQL view of a [`Counter`] record
pub struct Count(pub Counter);

#[Object]
impl Count {
    /// Opaque global identifier
    async fn id(&self) -> ID {
        ID(relay::to_global_id(COUNT_TYPE_NAME, &self.0.my_id))
    }

    /// Caller-supplied logical identifier
    async fn my_id(&self) -> Option<&str> {
        Some(self.0.my_id.as_str())
    }

    /// Current count
    async fn value(&self) -> Option<i64> {
        Some(self.0.value)
    }

    /// Every counter in the store
    async fn all(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Count>>>> {
        let store = ctx.data::<Arc<SledStore>>()?;
        Ok(Some(
            store
                .get_counters()?
                .into_iter()
                .map(|counter| Some(Count(counter)))
                .collect(),
        ))
    }
}

/// Relay node interface; every entity reachable through `node(id:)`
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID"))]
pub enum Node {
    Count(Count),
}

#[derive(InputObject)]
pub struct IncrementInput {
    /// Logical id of the counter to increment
    #[graphql(validator(min_length = 1))]
    pub my_id: String,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct IncrementPayload {
    /// Post-mutation state of the matching counter(s)
    pub count: Option<Vec<Option<Count>>>,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct DecrementInput {
    /// Logical id of the counter to decrement
    #[graphql(validator(min_length = 1))]
    pub my_id: String,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct DecrementPayload {
    /// Post-mutation state of the matching counter(s)
    pub count: Option<Vec<Option<Count>>>,
    pub client_mutation_id: Option<String>,
}
