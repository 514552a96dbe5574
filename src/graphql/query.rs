use async_graphql::{Context, Object, Result, ID};
use std::sync::Arc;

use super::types::{Count, Node, COUNT_TYPE_NAME};
use crate::relay;
use crate::store::{SledStore, Store};

pub struct QueryRoot;

#[Object(name = "Root")]
impl QueryRoot {
    /// Look up one counter by logical id, or list all of them
    async fn counters(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> Result<Option<Vec<Option<Count>>>> {
        let store = ctx.data::<Arc<SledStore>>()?;
        let counters = match id {
            Some(id) => store.get_counter(&id)?.into_iter().collect(),
            None => store.get_counters()?,
        };
        Ok(Some(
            counters
                .into_iter()
                .map(|counter| Some(Count(counter)))
                .collect(),
        ))
    }

    /// Resolve any entity from its opaque global identifier
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let store = ctx.data::<Arc<SledStore>>()?;
        let (type_name, local_id) = relay::from_global_id(&id)?;

        // Dispatch on the decoded type name; an unrecognized type resolves
        // to null rather than being forced into Count.
        match type_name.as_str() {
            COUNT_TYPE_NAME => Ok(store
                .get_counter(&local_id)?
                .map(|counter| Node::Count(Count(counter)))),
            _ => Ok(None),
        }
    }
}
