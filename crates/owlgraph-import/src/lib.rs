//! owlgraph-import: Maps an OWL ontology onto a labeled property graph.
//!
//! Resolves every class and named individual to one graph node, then runs a
//! fixed set of axiom translation rules that turn ontology axioms into
//! relationships between those nodes. Writes go to any `GraphSink`; the
//! binary wires in Neo4j.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod resolver;
pub mod rules;

pub use engine::Importer;
pub use error::ImportError;
pub use report::{CategoryStats, ImportReport};
pub use rules::AxiomRule;
