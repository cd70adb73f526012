//! Error types for the owlgraph-import crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Ontology error: {0}")]
    Ontology(#[from] owlgraph_ontology::OntologyError),

    #[error("Graph sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ImportError {
    pub(crate) fn sink<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Sink(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
