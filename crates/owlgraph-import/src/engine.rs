//! Import orchestration.
//!
//! Resolve entities → create every node → flush → run each axiom rule in
//! order → flush. All nodes are visible in the sink before the first
//! relationship is written.

use std::path::Path;

use chrono::Utc;

use owlgraph_core::GraphSink;
use owlgraph_ontology::{Ontology, OntologyLoader};

use crate::error::{ImportError, Result};
use crate::report::{CategoryStats, ImportReport};
use crate::resolver::{self, IdentityMapBuilder};
use crate::rules::AxiomRule;

/// Projects ontologies onto a graph sink.
pub struct Importer<S> {
    sink: S,
}

impl<S: GraphSink> Importer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Give back the sink, e.g. to inspect a [`owlgraph_core::MemorySink`].
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Load a document and import it. A parse failure aborts before any
    /// write reaches the sink.
    pub async fn import_path(&mut self, loader: &OntologyLoader, path: &Path) -> Result<ImportReport> {
        let ontology = loader.load_path(path)?;
        self.run(&ontology).await
    }

    /// Import a materialized ontology.
    ///
    /// Any sink error aborts the run; writes already accepted are not rolled
    /// back.
    pub async fn run(&mut self, ontology: &Ontology) -> Result<ImportReport> {
        let started_at = Utc::now();
        let resolution = resolver::resolve(ontology);

        let mut builder = IdentityMapBuilder::with_capacity(resolution.entities.len());
        for entity in &resolution.entities {
            let handle = self
                .sink
                .create_node(&entity.to_node())
                .await
                .map_err(ImportError::sink)?;
            builder.insert(&entity.uri, handle);
        }
        self.sink.flush().await.map_err(ImportError::sink)?;

        let ids = builder.finish(resolution.properties);
        if ids.is_empty() {
            tracing::warn!("Ontology declares no classes or named individuals");
        }
        tracing::info!(
            nodes = ids.len(),
            properties = ids.properties().len(),
            "Created entity nodes"
        );

        let mut report = ImportReport::new(started_at, ontology.len(), ids.len());
        for rule in AxiomRule::ALL {
            let mut stats = CategoryStats::default();
            let requests = rule.translate(ontology, &ids, &mut stats);
            for request in &requests {
                self.sink
                    .create_relationship(request)
                    .await
                    .map_err(ImportError::sink)?;
            }

            tracing::info!(category = rule.category(), emitted = stats.emitted, "Translated axioms");
            if stats.skipped > 0 {
                tracing::debug!(
                    category = rule.category(),
                    skipped = stats.skipped,
                    "Skipped axioms with unresolved references"
                );
            }
            report.record(rule, stats);
        }
        self.sink.flush().await.map_err(ImportError::sink)?;

        Ok(report.finish(Utc::now()))
    }
}
