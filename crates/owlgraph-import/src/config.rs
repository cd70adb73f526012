//! Configuration for the owlgraph importer.

use serde::Deserialize;

use owlgraph_graph::GraphConfig;
use owlgraph_ontology::RdfSyntax;

use crate::error::Result;

/// Top-level settings.
///
/// Loaded from `owlgraph.toml` (`[neo4j]` and `[import]` sections) and
/// `OWLGRAPH__` environment variables, e.g. `OWLGRAPH__NEO4J__PASSWORD`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub neo4j: GraphConfig,

    #[serde(default)]
    pub import: ImportConfig,
}

/// How the ontology is read and written.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// Statements per Neo4j transaction; 1 writes each statement on its own.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Force an RDF syntax instead of inferring it from the file extension.
    #[serde(default)]
    pub format: Option<RdfSyntax>,

    /// Base IRI for resolving relative IRIs in the document.
    #[serde(default)]
    pub base_iri: Option<String>,
}

fn default_batch_size() -> usize {
    1
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            format: None,
            base_iri: None,
        }
    }
}

/// Load settings from `{file_prefix}.toml` (optional) and the environment.
pub fn load_settings(file_prefix: &str) -> Result<Settings> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("OWLGRAPH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(cfg.try_deserialize()?)
}
