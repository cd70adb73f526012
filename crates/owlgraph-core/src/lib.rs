//! owlgraph-core: Shared types for projecting an OWL ontology onto a property graph.
//!
//! This crate provides the pieces every other owlgraph crate agrees on:
//! - Graph node and relationship request types
//! - The fixed relationship types emitted for axioms
//! - RDF, RDFS, and OWL vocabulary IRIs
//! - The `GraphSink` contract and an in-memory sink

pub mod sink;
pub mod types;
pub mod vocab;

pub use sink::{GraphSink, MemorySink, RecordedRelationship};
pub use types::{
    local_name, EdgeType, EntityKind, GraphNode, RelationshipProperties, RelationshipRequest,
    RelationshipTarget,
};
