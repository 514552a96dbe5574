use async_graphql::{Context, Object, Result};
use std::sync::Arc;

use super::types::{Count, DecrementInput, DecrementPayload, IncrementInput, IncrementPayload};
use crate::schema::Counter;
use crate::store::{SledStore, Store};

pub struct MutationRoot;

/// Keep only the counters the mutation targeted
fn matching(counters: Vec<Counter>, my_id: &str) -> Vec<Option<Count>> {
    counters
        .into_iter()
        .filter(|counter| counter.my_id == my_id)
        .map(|counter| Some(Count(counter)))
        .collect()
}

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add one to the counter with the given `myId`
    async fn increment(
        &self,
        ctx: &Context<'_>,
        input: IncrementInput,
    ) -> Result<IncrementPayload> {
        let store = ctx.data::<Arc<SledStore>>()?;
        let updated = store.increment_counter(&input.my_id)?;
        Ok(IncrementPayload {
            count: Some(matching(updated, &input.my_id)),
            client_mutation_id: input.client_mutation_id,
        })
    }

    /// Subtract one from the counter with the given `myId`
    async fn decrement(
        &self,
        ctx: &Context<'_>,
        input: DecrementInput,
    ) -> Result<DecrementPayload> {
        let store = ctx.data::<Arc<SledStore>>()?;
        let updated = store.decrement_counter(&input.my_id)?;
        Ok(DecrementPayload {
            count: Some(matching(updated, &input.my_id)),
            client_mutation_id: input.client_mutation_id,
        })
    }
}
