//! Integration tests for ownmark-graph against a live Neo4j instance.
//!
//! Run with: cargo test --package ownmark-graph --test integration -- --ignored
//!
//! Skipped automatically if Neo4j is not available. Connection settings
//! come from `GraphConfig::default()` (bolt://localhost:7687, neo4j/neo4j1).

use neo4rs::query;
use ownmark_graph::{GraphClient, GraphConfig};

async fn connect_or_skip() -> Option<GraphClient> {
    let config = GraphConfig::default();
    match GraphClient::connect(&config).await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            None
        }
    }
}

fn fixture_names(tag: &str, n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("OWNMARK_{tag}_{i}@TEST.LOCAL"))
        .collect()
}

async fn seed(client: &GraphClient, names: &[String]) {
    let q = query("UNWIND $names AS name CREATE (:User {name: name, ownmark_test: true})")
        .param("names", names.to_vec());
    client.run_in_txn(q).await.unwrap();
}

async fn cleanup(client: &GraphClient) {
    let q = query("MATCH (n {ownmark_test: true}) DETACH DELETE n");
    let _ = client.run_in_txn(q).await;
}

async fn owned_count(client: &GraphClient, names: &[String]) -> i64 {
    let mut stream = client
        .inner()
        .execute(
            query("MATCH (n) WHERE n.name IN $names AND n.owned = true RETURN count(n) AS cnt")
                .param("names", names.to_vec()),
        )
        .await
        .unwrap();
    let row = stream.next().await.unwrap().unwrap();
    row.get::<i64>("cnt").unwrap()
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_mark_owned_sets_flag() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;

    let names = fixture_names("basic", 3);
    seed(&client, &names).await;

    client.mark_owned(&names[..2]).await.unwrap();
    assert_eq!(owned_count(&client, &names).await, 2);

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_mark_owned_handles_quotes() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;

    let names = vec!["OWNMARK_\"QUOTED\"@TEST.LOCAL".to_string()];
    seed(&client, &names).await;

    client.mark_owned(&names).await.unwrap();
    assert_eq!(owned_count(&client, &names).await, 1);

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_unknown_names_are_ignored() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let names = fixture_names("absent", 2);
    client.mark_owned(&names).await.unwrap();
    assert_eq!(owned_count(&client, &names).await, 0);
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_close_is_synchronous_and_scoped_to_clone() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let other = client.clone();
    client.close();

    let names = fixture_names("after_close", 1);
    other.mark_owned(&names).await.unwrap();
    other.close();
}
