//! GraphQL API integration tests
//!
//! Each test builds a schema over a temporary store and executes documents
//! end to end, asserting on the JSON response.

use serde_json::json;
use std::sync::Arc;
use tally::{build_schema, to_global_id, CounterSchema, SledStore, Store};

fn store_with(ids: &[&str]) -> Arc<SledStore> {
    let store = Arc::new(SledStore::temporary().unwrap());
    for id in ids {
        store.create_counter(id).unwrap();
    }
    store
}

fn schema_with(ids: &[&str]) -> CounterSchema {
    build_schema(store_with(ids))
}

async fn execute(schema: &CounterSchema, query: &str) -> serde_json::Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn counters_with_id_returns_exactly_one_match() {
    let schema = schema_with(&["first", "second"]);
    let data = execute(&schema, r#"{ counters(id: "first") { myId value } }"#).await;
    assert_eq!(data, json!({ "counters": [{ "myId": "first", "value": 0 }] }));
}

#[tokio::test]
async fn counters_with_unknown_id_returns_empty_list() {
    let schema = schema_with(&["first"]);
    let data = execute(&schema, r#"{ counters(id: "ghost") { myId } }"#).await;
    assert_eq!(data, json!({ "counters": [] }));
}

#[tokio::test]
async fn counters_without_id_matches_the_store() {
    let store = store_with(&["b", "a", "c"]);
    let schema = build_schema(store.clone());

    let data = execute(&schema, "{ counters { myId } }").await;
    let listed: Vec<String> = data["counters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["myId"].as_str().unwrap().to_string())
        .collect();

    let stored: Vec<String> = store
        .get_counters()
        .unwrap()
        .into_iter()
        .map(|c| c.my_id)
        .collect();

    assert_eq!(listed, stored);
    assert_eq!(listed, ["a", "b", "c"]);
}

#[tokio::test]
async fn increment_then_read_is_one_greater() {
    let schema = schema_with(&["first"]);

    let data = execute(
        &schema,
        r#"mutation { increment(input: { myId: "first" }) { count { myId value } } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "increment": { "count": [{ "myId": "first", "value": 1 }] } })
    );

    let data = execute(&schema, r#"{ counters(id: "first") { value } }"#).await;
    assert_eq!(data, json!({ "counters": [{ "value": 1 }] }));
}

#[tokio::test]
async fn decrement_then_read_is_one_less() {
    let schema = schema_with(&["first"]);

    let data = execute(
        &schema,
        r#"mutation { decrement(input: { myId: "first" }) { count { value } } }"#,
    )
    .await;
    assert_eq!(data, json!({ "decrement": { "count": [{ "value": -1 }] } }));

    let data = execute(&schema, r#"{ counters(id: "first") { value } }"#).await;
    assert_eq!(data, json!({ "counters": [{ "value": -1 }] }));
}

#[tokio::test]
async fn mutation_on_ghost_id_returns_empty_count() {
    let schema = schema_with(&["first"]);

    let data = execute(
        &schema,
        r#"mutation { increment(input: { myId: "ghost" }) { count { myId } } }"#,
    )
    .await;
    assert_eq!(data, json!({ "increment": { "count": [] } }));

    // The existing counter is untouched
    let data = execute(&schema, r#"{ counters(id: "first") { value } }"#).await;
    assert_eq!(data, json!({ "counters": [{ "value": 0 }] }));
}

#[tokio::test]
async fn client_mutation_id_is_echoed_back() {
    let schema = schema_with(&["first"]);
    let data = execute(
        &schema,
        r#"mutation {
            increment(input: { myId: "first", clientMutationId: "req-42" }) {
                clientMutationId
            }
        }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "increment": { "clientMutationId": "req-42" } })
    );
}

#[tokio::test]
async fn empty_my_id_is_rejected() {
    let schema = schema_with(&["first"]);
    let response = schema
        .execute(r#"mutation { increment(input: { myId: "" }) { clientMutationId } }"#)
        .await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn node_resolves_a_counter_from_its_global_id() {
    let schema = schema_with(&["first"]);

    let data = execute(&schema, r#"{ counters(id: "first") { id } }"#).await;
    let global_id = data["counters"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(global_id, to_global_id("Count", "first"));

    let query = format!(
        r#"{{ node(id: "{}") {{ id ... on Count {{ myId value }} }} }}"#,
        global_id
    );
    let data = execute(&schema, &query).await;
    assert_eq!(
        data,
        json!({ "node": { "id": global_id, "myId": "first", "value": 0 } })
    );
}

#[tokio::test]
async fn node_with_unknown_local_id_is_null_not_an_error() {
    let schema = schema_with(&["first"]);
    let query = format!(
        r#"{{ node(id: "{}") {{ id }} }}"#,
        to_global_id("Count", "ghost")
    );
    let data = execute(&schema, &query).await;
    assert_eq!(data, json!({ "node": null }));
}

#[tokio::test]
async fn node_with_unrecognized_type_name_is_null() {
    let schema = schema_with(&["first"]);
    let query = format!(
        r#"{{ node(id: "{}") {{ id }} }}"#,
        to_global_id("Post", "first")
    );
    let data = execute(&schema, &query).await;
    assert_eq!(data, json!({ "node": null }));
}

#[tokio::test]
async fn node_with_malformed_global_id_is_an_error() {
    let schema = schema_with(&["first"]);
    let response = schema
        .execute(r#"{ node(id: "not a global id!!!") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn all_field_lists_every_counter() {
    let schema = schema_with(&["a", "b"]);
    let data = execute(&schema, r#"{ counters(id: "a") { all { myId } } }"#).await;
    assert_eq!(
        data,
        json!({ "counters": [{ "all": [{ "myId": "a" }, { "myId": "b" }] }] })
    );
}

#[tokio::test]
async fn sdl_declares_the_relay_surface() {
    let schema = schema_with(&[]);
    let sdl = schema.sdl();
    assert!(sdl.contains("type Count implements Node"));
    assert!(sdl.contains("input IncrementInput"));
    assert!(sdl.contains("type IncrementPayload"));
    assert!(sdl.contains("input DecrementInput"));
    assert!(sdl.contains("type DecrementPayload"));
    assert!(sdl.contains("type Root"));
    assert!(sdl.contains("type Mutation"));
    // List fields carry nullable elements, [Count] rather than [Count!]
    assert!(sdl.contains("counters(id: String): [Count]"));
    assert!(sdl.contains("all: [Count]"));
    assert!(sdl.contains("count: [Count]"));
}
