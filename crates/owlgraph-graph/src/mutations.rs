//! Write operations for the ontology graph.
//!
//! Nodes are plain CREATEs: the importer guarantees one node per entity URI,
//! so no MERGE is needed. Relationships locate their endpoints by
//! `(label, uri)`. Labels, relationship types, and property keys come from
//! the ontology and are always backtick-escaped.

use neo4rs::{query, Query};

use owlgraph_core::{GraphNode, RelationshipProperties, RelationshipRequest, RelationshipTarget};

use crate::client::{GraphClient, GraphError};
use crate::sink::NodeKey;

/// Label given to nodes materialized for annotation values.
pub const ANNOTATION_VALUE_LABEL: &str = "AnnotationValue";

/// A Cypher statement with string parameters.
///
/// Kept separate from `neo4rs::Query` so the generated text can be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub cypher: String,
    pub params: Vec<(String, String)>,
}

impl Statement {
    fn new(cypher: String) -> Self {
        Self {
            cypher,
            params: Vec::new(),
        }
    }

    fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    /// Build the executable query.
    pub fn into_query(self) -> Query {
        self.params
            .into_iter()
            .fold(query(&self.cypher), |q, (key, value)| q.param(&key, value))
    }
}

impl From<Statement> for Query {
    fn from(statement: Statement) -> Self {
        statement.into_query()
    }
}

/// `CREATE` statement for one entity node.
pub fn create_node_statement(node: &GraphNode) -> Statement {
    Statement::new(format!(
        "CREATE (n:{} {{uri: $uri, comment: $comment}})",
        escape_identifier(&node.label)
    ))
    .param("uri", node.uri.clone())
    .param("comment", node.comment.clone())
}

/// `CREATE` statement for one relationship.
pub fn create_relationship_statement(request: &RelationshipRequest<NodeKey>) -> Statement {
    let source = &request.source;
    let target_match = match &request.target {
        RelationshipTarget::Node(target) => format!(
            "MATCH (b:{} {{uri: $target_uri}})",
            escape_identifier(&target.label)
        ),
        RelationshipTarget::Value(_) => {
            format!("MERGE (b:{ANNOTATION_VALUE_LABEL} {{value: $target_value}})")
        }
    };

    let mut cypher = format!(
        "MATCH (a:{} {{uri: $source_uri}})\n{target_match}\nCREATE (a)-[r:{}]->(b)",
        escape_identifier(&source.label),
        escape_identifier(&request.rel_type)
    );
    let (set_clause, prop_params) = set_clause(&request.properties);
    cypher.push_str(&set_clause);

    let mut statement = Statement::new(cypher).param("source_uri", source.uri.clone());
    statement = match &request.target {
        RelationshipTarget::Node(target) => statement.param("target_uri", target.uri.clone()),
        RelationshipTarget::Value(value) => statement.param("target_value", value.clone()),
    };
    for (key, value) in prop_params {
        statement = statement.param(&key, value);
    }
    statement
}

/// Statement removing every node and relationship.
pub fn wipe_statement() -> Statement {
    Statement::new("MATCH (n) DETACH DELETE n".to_string())
}

impl GraphClient {
    /// Delete the whole graph so an import starts from an empty store.
    pub async fn wipe(&self) -> Result<(), GraphError> {
        self.run(wipe_statement().into_query()).await?;
        tracing::info!("Cleared existing graph");
        Ok(())
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Quote a label, relationship type, or property key for Cypher.
pub fn escape_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// `SET` clause for relationship properties, with numbered parameters.
fn set_clause(props: &RelationshipProperties) -> (String, Vec<(String, String)>) {
    if props.is_empty() {
        return (String::new(), Vec::new());
    }
    let mut assignments = Vec::with_capacity(props.len());
    let mut params = Vec::with_capacity(props.len());
    for (i, (key, value)) in props.iter().enumerate() {
        let param = format!("p{i}");
        assignments.push(format!("r.{} = ${param}", escape_identifier(key)));
        params.push((param, value.clone()));
    }
    (format!("\nSET {}", assignments.join(", ")), params)
}
