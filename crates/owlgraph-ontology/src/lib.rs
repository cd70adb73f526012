//! owlgraph-ontology: In-memory ontology model for the owlgraph importer.
//!
//! Reads a serialized ontology (Turtle, RDF/XML, N-Triples, ...) into an
//! indexed triple set and answers the handful of structural queries the
//! axiom translator needs.

pub mod error;
pub mod loader;
pub mod model;
pub mod term;

pub use error::OntologyError;
pub use loader::{OntologyLoader, RdfSyntax};
pub use model::Ontology;
pub use term::{Term, Triple};
