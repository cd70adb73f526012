//! Import run summary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rules::AxiomRule;

/// Per-category translation counters.
///
/// `skipped` counts axiom instances dropped because an endpoint has no
/// node. Built-in vocabulary declarations (`x rdf:type owl:Class`) are not
/// class assertions and are not counted.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CategoryStats {
    pub emitted: u64,
    pub skipped: u64,
}

/// Counters for one axiom category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: AxiomRule,
    #[serde(flatten)]
    pub stats: CategoryStats,
}

/// Result of one import run.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Distinct triples in the source ontology.
    pub triples: usize,
    /// Nodes created.
    pub nodes: usize,
    /// Per-category counters in rule order.
    pub categories: Vec<CategoryReport>,
}

impl ImportReport {
    pub fn new(started_at: DateTime<Utc>, triples: usize, nodes: usize) -> Self {
        Self {
            started_at,
            finished_at: None,
            triples,
            nodes,
            categories: Vec::with_capacity(AxiomRule::ALL.len()),
        }
    }

    pub fn record(&mut self, category: AxiomRule, stats: CategoryStats) {
        self.categories.push(CategoryReport { category, stats });
    }

    pub fn finish(mut self, finished_at: DateTime<Utc>) -> Self {
        self.finished_at = Some(finished_at);
        self
    }

    /// Relationships created across all categories.
    pub fn relationships(&self) -> u64 {
        self.categories.iter().map(|c| c.stats.emitted).sum()
    }

    /// Axiom instances skipped across all categories.
    pub fn skipped(&self) -> u64 {
        self.categories.iter().map(|c| c.stats.skipped).sum()
    }

    /// Counters for one category, if it ran.
    pub fn category(&self, rule: AxiomRule) -> Option<CategoryStats> {
        self.categories
            .iter()
            .find(|c| c.category == rule)
            .map(|c| c.stats)
    }
}
