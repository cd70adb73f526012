//! Neo4j-backed graph sink.

use neo4rs::Query;
use serde::Serialize;

use owlgraph_core::{GraphNode, GraphSink, RelationshipRequest};

use crate::client::{GraphClient, GraphError};
use crate::mutations::{create_node_statement, create_relationship_statement};

/// Handle of a node written by [`Neo4jSink`].
///
/// The importer creates exactly one node per URI, so `(label, uri)` is
/// unique and lets relationship writes use the label index.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub label: String,
    pub uri: String,
}

/// Writes nodes and relationships to Neo4j.
///
/// With a batch size of 1 every write is its own auto-commit query. Larger
/// batch sizes buffer statements and commit them in transactions of that
/// many statements.
pub struct Neo4jSink {
    client: GraphClient,
    batch_size: usize,
    pending: Vec<Query>,
    committed: u64,
}

impl Neo4jSink {
    pub fn new(client: GraphClient) -> Self {
        Self {
            client,
            batch_size: 1,
            pending: Vec::new(),
            committed: 0,
        }
    }

    /// Set the number of statements committed per transaction.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Statements written so far.
    pub fn committed(&self) -> u64 {
        self.committed
    }

    async fn submit(&mut self, query: Query) -> Result<(), GraphError> {
        if self.batch_size == 1 {
            self.client.run(query).await?;
            self.committed += 1;
            return Ok(());
        }

        self.pending.push(query);
        if self.pending.len() >= self.batch_size {
            self.commit_pending().await?;
        }
        Ok(())
    }

    async fn commit_pending(&mut self) -> Result<(), GraphError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let count = self.pending.len();
        let mut txn = self.client.start_txn().await?;
        for query in self.pending.drain(..) {
            txn.run(query).await?;
        }
        txn.commit().await?;

        self.committed += count as u64;
        tracing::debug!(statements = count, total = self.committed, "Committed batch");
        Ok(())
    }
}

impl GraphSink for Neo4jSink {
    type Handle = NodeKey;
    type Error = GraphError;

    async fn create_node(&mut self, node: &GraphNode) -> Result<NodeKey, GraphError> {
        self.submit(create_node_statement(node).into_query()).await?;
        Ok(NodeKey {
            label: node.label.clone(),
            uri: node.uri.clone(),
        })
    }

    async fn create_relationship(
        &mut self,
        request: &RelationshipRequest<NodeKey>,
    ) -> Result<(), GraphError> {
        self.submit(create_relationship_statement(request).into_query())
            .await
    }

    async fn flush(&mut self) -> Result<(), GraphError> {
        self.commit_pending().await
    }
}
