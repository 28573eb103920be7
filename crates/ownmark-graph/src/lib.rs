//! ownmark-graph: Neo4j client for flagging principals as owned.
//!
//! All writes against the BloodHound graph go through [`GraphClient`]:
//! a connection verified up front, one parameterized statement per batch,
//! and an explicit close.

pub mod client;
pub mod mutations;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use mutations::MARK_OWNED_CYPHER;
