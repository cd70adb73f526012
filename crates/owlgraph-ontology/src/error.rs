//! Error types for the owlgraph-ontology crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OntologyError {
    #[error("Failed to read ontology {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot infer RDF syntax for {path}; pass an explicit format")]
    UnknownSyntax { path: String },

    #[error("Unsupported RDF syntax: {0}")]
    UnsupportedSyntax(String),

    #[error("Invalid base IRI {iri}: {reason}")]
    InvalidBaseIri { iri: String, reason: String },

    #[error("Failed to parse ontology: {0}")]
    Parse(#[from] oxrdfio::RdfParseError),
}

pub type Result<T> = std::result::Result<T, OntologyError>;
