//! Entity resolution: display labels, comments, and node identities.
//!
//! Every class and named individual gets exactly one node. Properties are
//! resolved for their label and comment only; they name relationships.
//! Missing metadata is never an error: the label falls back to the URI's
//! local name and the comment to an empty string.

use std::collections::{HashMap, HashSet};

use owlgraph_core::vocab::rdfs;
use owlgraph_core::{local_name, EntityKind, GraphNode};
use owlgraph_ontology::{Ontology, Term};

/// An entity with its resolved metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    pub uri: String,
    pub kind: EntityKind,
    pub label: String,
    pub comment: String,
}

impl ResolvedEntity {
    /// The node creation request for this entity.
    pub fn to_node(&self) -> GraphNode {
        GraphNode {
            label: self.label.clone(),
            uri: self.uri.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// Output of the resolution pass, before any node exists.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Node-bearing entities, classes first, in document order.
    pub entities: Vec<ResolvedEntity>,
    /// Object properties then datatype properties, in document order.
    pub properties: Vec<ResolvedEntity>,
}

/// Resolve every declared entity of the ontology.
pub fn resolve(ontology: &Ontology) -> Resolution {
    Resolution {
        entities: resolve_kinds(ontology, &EntityKind::NODE_KINDS),
        properties: resolve_kinds(ontology, &EntityKind::PROPERTY_KINDS),
    }
}

fn resolve_kinds(ontology: &Ontology, kinds: &[EntityKind]) -> Vec<ResolvedEntity> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for kind in kinds {
        for subject in ontology.subjects_of_type(kind.type_iri()) {
            // Anonymous class expressions are not entities.
            let Some(uri) = subject.as_iri() else {
                continue;
            };
            if !seen.insert(uri) {
                continue;
            }
            resolved.push(ResolvedEntity {
                uri: uri.to_string(),
                kind: *kind,
                // Blank labels are passed over: the label becomes a Neo4j node label.
                label: resolve_label(ontology, subject),
                comment: resolve_comment(ontology, subject),
            });
        }
    }

    resolved
}

/// First non-blank `rdfs:label`, else the URI's display name.
pub fn resolve_label(ontology: &Ontology, entity: &Term) -> String {
    ontology
        .objects(entity, rdfs::LABEL)
        .map(Term::lexical)
        .find(|label| !label.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| display_name(entity.lexical()).to_string())
}

/// First `rdfs:comment`, else the empty string.
pub fn resolve_comment(ontology: &Ontology, entity: &Term) -> String {
    ontology
        .value(entity, rdfs::COMMENT)
        .map(|c| c.lexical().to_string())
        .unwrap_or_default()
}

/// Local name of a URI, or the whole URI when the local name is empty.
pub fn display_name(uri: &str) -> &str {
    match local_name(uri) {
        "" => uri,
        name => name,
    }
}

// ── Identity Map ─────────────────────────────────────────────────

/// Read-only lookup from entity URI to node handle.
///
/// Built once after every node exists; translation rules only borrow it.
#[derive(Debug, Clone)]
pub struct IdentityMap<H> {
    handles: HashMap<String, H>,
    properties: Vec<ResolvedEntity>,
}

impl<H> IdentityMap<H> {
    /// Handle of the node for `uri`, if one was created.
    pub fn handle(&self, uri: &str) -> Option<&H> {
        self.handles.get(uri)
    }

    /// Handle of the node for an IRI term. Blank nodes and literals never
    /// resolve.
    pub fn handle_of(&self, term: &Term) -> Option<&H> {
        term.as_iri().and_then(|uri| self.handle(uri))
    }

    /// Resolved properties, object properties first.
    pub fn properties(&self) -> &[ResolvedEntity] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Collects node handles while nodes are being created.
#[derive(Debug)]
pub struct IdentityMapBuilder<H> {
    handles: HashMap<String, H>,
}

impl<H> IdentityMapBuilder<H> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: HashMap::with_capacity(capacity),
        }
    }

    /// Register the node for `uri`. The first registration wins; returns
    /// false for a repeat.
    pub fn insert(&mut self, uri: &str, handle: H) -> bool {
        if self.handles.contains_key(uri) {
            return false;
        }
        self.handles.insert(uri.to_string(), handle);
        true
    }

    /// Freeze the map.
    pub fn finish(self, properties: Vec<ResolvedEntity>) -> IdentityMap<H> {
        IdentityMap {
            handles: self.handles,
            properties,
        }
    }
}
