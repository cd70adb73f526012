//! Graph sinks: the write trait and an in-memory implementation.
//!
//! A sink accepts node and relationship creation requests in order and
//! returns nothing but node handles. The importer never reads graph state
//! back from a sink.

use std::convert::Infallible;
use std::future::Future;

use serde::Serialize;

use crate::types::{GraphNode, RelationshipProperties, RelationshipRequest, RelationshipTarget};

/// Destination for node and relationship creation requests.
///
/// Calls are issued sequentially and must be applied in order. A sink may
/// buffer writes, but everything accepted before `flush` returns must be
/// visible to later writes.
pub trait GraphSink {
    /// Opaque identity of a created node.
    type Handle: Clone + Send + Sync;

    /// Error raised by the underlying store. Any error aborts the import.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create one node and return its handle.
    fn create_node(
        &mut self,
        node: &GraphNode,
    ) -> impl Future<Output = Result<Self::Handle, Self::Error>> + Send;

    /// Create one directed relationship.
    fn create_relationship(
        &mut self,
        request: &RelationshipRequest<Self::Handle>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Make every accepted write durable and visible.
    fn flush(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async { Ok(()) }
    }
}

/// A relationship captured by [`MemorySink`], with node indices as endpoints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecordedRelationship {
    pub source: usize,
    pub rel_type: String,
    pub target: RelationshipTarget<usize>,
    pub properties: RelationshipProperties,
}

/// Sink that records the projected graph in memory.
///
/// Handles are indices into `nodes`. Used for dry runs and as the test double
/// for the import engine.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemorySink {
    pub nodes: Vec<GraphNode>,
    pub relationships: Vec<RecordedRelationship>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a node by its source URI.
    pub fn node_by_uri(&self, uri: &str) -> Option<(usize, &GraphNode)> {
        self.nodes.iter().enumerate().find(|(_, n)| n.uri == uri)
    }

    /// All relationships of one type, in emission order.
    pub fn relationships_of_type<'a>(
        &'a self,
        rel_type: &'a str,
    ) -> impl Iterator<Item = &'a RecordedRelationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| r.rel_type == rel_type)
    }
}

impl GraphSink for MemorySink {
    type Handle = usize;
    type Error = Infallible;

    async fn create_node(&mut self, node: &GraphNode) -> Result<usize, Infallible> {
        self.nodes.push(node.clone());
        Ok(self.nodes.len() - 1)
    }

    async fn create_relationship(
        &mut self,
        request: &RelationshipRequest<usize>,
    ) -> Result<(), Infallible> {
        self.relationships.push(RecordedRelationship {
            source: request.source,
            rel_type: request.rel_type.clone(),
            target: request.target.clone(),
            properties: request.properties.clone(),
        });
        Ok(())
    }
}
