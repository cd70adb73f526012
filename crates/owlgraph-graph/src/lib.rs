//! owlgraph Graph: Neo4j client for the projected ontology graph.
//!
//! This crate is the only place that speaks Cypher. The import engine
//! writes through [`Neo4jSink`]; verification and reset helpers live on
//! [`GraphClient`].

pub mod client;
pub mod mutations;
pub mod queries;
pub mod sink;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use queries::GraphSummary;
pub use sink::{Neo4jSink, NodeKey};
