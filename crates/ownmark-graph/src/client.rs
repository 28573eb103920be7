//! Neo4j connection management.

use std::time::Duration;

use neo4rs::{query, ConfigBuilder, Graph, Query};
use serde::Deserialize;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j did not answer within {secs}s")]
    ConnectTimeout { secs: u64 },

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),
}

/// Configuration for connecting to Neo4j.
///
/// Loaded from the `[neo4j]` section of `ownmark.toml` or
/// `OWNMARK__NEO4J__` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Target database; the server default when unset.
    #[serde(default)]
    pub database: Option<String>,

    /// Upper bound on establishing the first bolt session.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Batches are sent one at a time, so a single connection suffices.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "neo4j1".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_max_connections() -> usize {
    1
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            database: None,
            connect_timeout_secs: default_connect_timeout(),
            max_connections: default_max_connections(),
        }
    }
}

/// Neo4j graph client.
///
/// Clone is cheap (inner Arc). The underlying pool is released when the
/// last clone is dropped; [`GraphClient::close`] does so explicitly.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
    uri: String,
}

impl GraphClient {
    /// Connect to Neo4j and verify the server answers.
    ///
    /// `Graph::connect` only builds a lazy pool, so a `RETURN 1` ping is
    /// issued inside the same timeout to surface bad hosts or credentials
    /// here rather than on the first batch.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let mut builder = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections.max(1));
        if let Some(db) = &config.database {
            builder = builder.db(db.as_str());
        }
        let neo_config = builder
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let secs = config.connect_timeout_secs;
        let handshake = async {
            let graph = Graph::connect(neo_config)
                .await
                .map_err(|e| GraphError::Connection(e.to_string()))?;
            graph
                .run(query("RETURN 1"))
                .await
                .map_err(|e| GraphError::Connection(e.to_string()))?;
            Ok::<_, GraphError>(graph)
        };

        let graph = tokio::time::timeout(Duration::from_secs(secs), handshake)
            .await
            .map_err(|_| GraphError::ConnectTimeout { secs })??;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self {
            graph,
            uri: config.uri.clone(),
        })
    }

    /// Get a reference to the underlying neo4rs Graph for direct operations.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }

    /// Execute a query inside an explicit write transaction.
    ///
    /// The transaction is rolled back if the statement fails.
    pub async fn run_in_txn(&self, q: Query) -> Result<(), GraphError> {
        let mut txn = self.graph.start_txn().await?;
        if let Err(e) = txn.run(q).await {
            if let Err(rollback) = txn.rollback().await {
                tracing::warn!(error = %rollback, "Rollback after failed statement also failed");
            }
            return Err(e.into());
        }
        txn.commit().await?;
        Ok(())
    }

    /// Release the connection pool.
    pub fn close(self) {
        tracing::info!(uri = %self.uri, "Closing Neo4j connection");
        drop(self.graph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.uri, "bolt://localhost:7687");
        assert_eq!(config.user, "neo4j");
        assert_eq!(config.password, "neo4j1");
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.max_connections, 1);
        assert!(config.database.is_none());
    }

    #[tokio::test]
    async fn test_connect_refused_fails() {
        // Port 1 is reserved and closed on any sane test host.
        let config = GraphConfig {
            uri: "bolt://127.0.0.1:1".to_string(),
            connect_timeout_secs: 5,
            ..Default::default()
        };
        let result = GraphClient::connect(&config).await;
        assert!(matches!(
            result,
            Err(GraphError::Connection(_)) | Err(GraphError::ConnectTimeout { .. })
        ));
    }
}
