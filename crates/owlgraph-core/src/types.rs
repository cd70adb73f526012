//! Core data model for the ontology property graph.
//!
//! Nodes are keyed by the URI of the ontology entity they project. Relationship
//! requests are generic over the node handle type so that every sink can pick
//! its own notion of identity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::vocab::owl;

// ── Entities ──────────────────────────────────────────────────────

/// Declared kind of an ontology entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    Individual,
    ObjectProperty,
    DatatypeProperty,
}

impl EntityKind {
    /// Kinds that become graph nodes, in the order they are scanned.
    pub const NODE_KINDS: [EntityKind; 2] = [EntityKind::Class, EntityKind::Individual];

    /// Kinds that become relationship types, in the order they are scanned.
    pub const PROPERTY_KINDS: [EntityKind; 2] =
        [EntityKind::ObjectProperty, EntityKind::DatatypeProperty];

    /// The OWL type IRI that declares this kind.
    pub fn type_iri(&self) -> &'static str {
        match self {
            Self::Class => owl::CLASS,
            Self::Individual => owl::NAMED_INDIVIDUAL,
            Self::ObjectProperty => owl::OBJECT_PROPERTY,
            Self::DatatypeProperty => owl::DATATYPE_PROPERTY,
        }
    }
}

// ── Nodes ─────────────────────────────────────────────────────────

/// A request to create one graph node for an ontology entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    /// Resolved display label, used as the node's type tag.
    pub label: String,
    /// Source URI of the entity.
    pub uri: String,
    /// Resolved comment, possibly empty.
    pub comment: String,
}

// ── Relationships ─────────────────────────────────────────────────

/// Scalar relationship properties, ordered by key for stable output.
pub type RelationshipProperties = BTreeMap<String, String>;

/// Target end of a relationship.
///
/// Annotation axioms may point at a literal or an entity that has no node,
/// so the target is not always a node handle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipTarget<H> {
    Node(H),
    Value(String),
}

/// A request to create one directed relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRequest<H> {
    pub source: H,
    pub rel_type: String,
    pub target: RelationshipTarget<H>,
    pub properties: RelationshipProperties,
}

impl<H> RelationshipRequest<H> {
    /// A node-to-node relationship without properties.
    pub fn between(source: H, edge_type: EdgeType, target: H) -> Self {
        Self {
            source,
            rel_type: edge_type.as_cypher().to_string(),
            target: RelationshipTarget::Node(target),
            properties: RelationshipProperties::new(),
        }
    }

    /// Attach a scalar property.
    pub fn with_property(mut self, key: &str, value: impl Into<String>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}

/// Fixed relationship types produced by structural axioms.
///
/// Property assertions and annotation axioms take their relationship type
/// from the ontology instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EdgeType {
    SubclassOf,
    EquivalentTo,
    InstanceOf,
    RestrictionOn,
    OnlyRestrictionOn,
    DisjointWith,
    InverseOf,
    IsTransitive,
}

impl EdgeType {
    /// Relationship type string as written to the graph.
    pub fn as_cypher(&self) -> &'static str {
        match self {
            Self::SubclassOf => "SUBCLASS_OF",
            Self::EquivalentTo => "EQUIVALENT_TO",
            Self::InstanceOf => "INSTANCE_OF",
            Self::RestrictionOn => "RESTRICTION_ON",
            Self::OnlyRestrictionOn => "ONLY_RESTRICTION_ON",
            Self::DisjointWith => "DISJOINT_WITH",
            Self::InverseOf => "INVERSE_OF",
            Self::IsTransitive => "IS_TRANSITIVE",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_cypher())
    }
}

// ── Helpers ───────────────────────────────────────────────────────

/// Local name of a URI: the text after the last `#`, or after the last `/`
/// when there is no `#`. A URI with neither is returned whole.
pub fn local_name(uri: &str) -> &str {
    match uri.rfind('#') {
        Some(pos) => &uri[pos + 1..],
        None => match uri.rfind('/') {
            Some(pos) => &uri[pos + 1..],
            None => uri,
        },
    }
}
