//! Write operations: flag principals as owned.
//!
//! Names are bound as a list parameter and matched with `UNWIND`, so each
//! batch is one statement and one round trip regardless of its size, and
//! names containing quotes never reach the statement text.

use neo4rs::{query, Query};

use crate::client::{GraphClient, GraphError};

/// Statement setting `owned = true` on every node whose `name` is in `$names`.
pub const MARK_OWNED_CYPHER: &str = "UNWIND $names AS name
     MATCH (n {name: name})
     SET n.owned = true";

/// Build the owned-flag statement for one batch.
pub fn mark_owned_query(names: &[String]) -> Query {
    query(MARK_OWNED_CYPHER).param("names", names.to_vec())
}

impl GraphClient {
    /// Set `owned = true` on all nodes named in `names`, in one write
    /// transaction. Result rows are not inspected.
    pub async fn mark_owned(&self, names: &[String]) -> Result<(), GraphError> {
        if names.is_empty() {
            return Ok(());
        }
        self.run_in_txn(mark_owned_query(names)).await
    }
}
