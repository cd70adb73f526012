//! Indexed in-memory triple set.
//!
//! Triples are kept once each, in the order they were first inserted, and
//! indexed by subject and by predicate. Every query returns results in
//! insertion order, so repeated runs over the same document see the same
//! sequence.

use std::collections::{HashMap, HashSet};

use owlgraph_core::vocab::rdf;

use crate::term::{Term, Triple};

/// A fully materialized ontology.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_subject: HashMap<Term, Vec<usize>>,
    by_predicate: HashMap<String, Vec<usize>>,
}

impl Ontology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let index = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(index);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(index);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    // ── Queries ──────────────────────────────────────────────────

    /// All subjects declared `rdf:type` the given type.
    pub fn subjects_of_type<'a>(&'a self, type_iri: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.subjects_with(rdf::TYPE, Term::iri(type_iri))
    }

    /// All subjects `s` such that `(s, predicate, object)` holds.
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &'a str,
        object: Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.subject_objects(predicate)
            .filter(move |(_, o)| **o == object)
            .map(|(s, _)| s)
    }

    /// All objects of `predicate` for `subject`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.predicate_objects(subject)
            .filter(move |(p, _)| *p == predicate)
            .map(|(_, o)| o)
    }

    /// The first object of `predicate` for `subject`, if any.
    pub fn value<'a>(&'a self, subject: &'a Term, predicate: &'a str) -> Option<&'a Term> {
        self.objects(subject, predicate).next()
    }

    /// All `(subject, object)` pairs for `predicate`.
    pub fn subject_objects<'a>(
        &'a self,
        predicate: &str,
    ) -> impl Iterator<Item = (&'a Term, &'a Term)> + 'a {
        self.indices(self.by_predicate.get(predicate))
            .map(|t| (&t.subject, &t.object))
    }

    /// All `(predicate, object)` pairs for `subject`.
    pub fn predicate_objects<'a>(
        &'a self,
        subject: &Term,
    ) -> impl Iterator<Item = (&'a str, &'a Term)> + 'a {
        self.indices(self.by_subject.get(subject))
            .map(|t| (t.predicate.as_str(), &t.object))
    }

    /// Members of an RDF collection starting at `head`.
    ///
    /// Stops at `rdf:nil`, at a cell without `rdf:first`, or when a cell is
    /// revisited.
    pub fn list_items<'a>(&'a self, head: &'a Term) -> Vec<&'a Term> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut cell = head;

        while cell.as_iri() != Some(rdf::NIL) && visited.insert(cell) {
            let Some(first) = self.value(cell, rdf::FIRST) else {
                break;
            };
            items.push(first);
            match self.value(cell, rdf::REST) {
                Some(rest) => cell = rest,
                None => break,
            }
        }

        items
    }

    /// Whether `term` is the head of an RDF collection.
    pub fn is_list(&self, term: &Term) -> bool {
        term.as_iri() == Some(rdf::NIL) || self.value(term, rdf::FIRST).is_some()
    }

    fn indices<'a>(&'a self, slot: Option<&'a Vec<usize>>) -> impl Iterator<Item = &'a Triple> + 'a {
        slot.map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.triples[i])
    }
}

impl FromIterator<Triple> for Ontology {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut ontology = Self::new();
        for triple in iter {
            ontology.insert(triple);
        }
        ontology
    }
}

impl Extend<Triple> for Ontology {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}
