//! Read operations used to verify an import.

use neo4rs::query;
use serde::Serialize;

use crate::client::{GraphClient, GraphError};
use crate::mutations::escape_identifier;

/// Node and relationship totals for the whole graph.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct GraphSummary {
    pub nodes: i64,
    pub relationships: i64,
}

impl GraphClient {
    /// Count all nodes and relationships.
    pub async fn summary(&self) -> Result<GraphSummary, GraphError> {
        let nodes = self.count("MATCH (n) RETURN count(n) AS cnt").await?;
        let relationships = self
            .count("MATCH ()-[r]->() RETURN count(r) AS cnt")
            .await?;
        Ok(GraphSummary {
            nodes,
            relationships,
        })
    }

    /// Count nodes carrying the given source URI.
    pub async fn count_nodes_with_uri(&self, uri: &str) -> Result<i64, GraphError> {
        let q = query("MATCH (n {uri: $uri}) RETURN count(n) AS cnt").param("uri", uri.to_string());
        self.count_query(q).await
    }

    /// Count relationships of one type.
    pub async fn count_relationships(&self, rel_type: &str) -> Result<i64, GraphError> {
        let cypher = format!(
            "MATCH ()-[r:{}]->() RETURN count(r) AS cnt",
            escape_identifier(rel_type)
        );
        self.count(&cypher).await
    }

    async fn count(&self, cypher: &str) -> Result<i64, GraphError> {
        self.count_query(query(cypher)).await
    }

    async fn count_query(&self, q: neo4rs::Query) -> Result<i64, GraphError> {
        match self.query_one(q).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}
