//! Axiom translation rules.
//!
//! Each rule projects one axiom shape onto one relationship shape. Rules are
//! independent of each other and only read the ontology and the identity
//! map. An axiom instance whose endpoints do not all resolve to nodes is
//! skipped on its own; the rule carries on with the next instance.

use serde::Serialize;

use owlgraph_core::vocab::{self, owl, rdf, rdfs};
use owlgraph_core::{EdgeType, RelationshipProperties, RelationshipRequest, RelationshipTarget};
use owlgraph_ontology::{Ontology, Term};

use crate::report::CategoryStats;
use crate::resolver::{display_name, IdentityMap};

/// One axiom category and its translation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AxiomRule {
    /// Asserted `s p o` for a declared object or datatype property `p`.
    PropertyAssertion,
    /// `rdfs:subClassOf` → `SUBCLASS_OF`.
    SubClassOf,
    /// `owl:equivalentClass` → `EQUIVALENT_TO`.
    EquivalentClass,
    /// Reified `owl:annotatedSource`/`Property`/`Target` statements.
    ///
    /// The edge starts at the annotated source, not at the axiom resource
    /// that carries the reification. An axiom resource is never a source,
    /// even when it is itself a named individual.
    Annotation,
    /// `rdf:type` between an individual and a class → `INSTANCE_OF`.
    ClassAssertion,
    /// `someValuesFrom`/`allValuesFrom` restrictions inside `owl:intersectionOf`.
    Restriction,
    /// `owl:disjointWith` → `DISJOINT_WITH`.
    DisjointWith,
    /// `owl:inverseOf` → `INVERSE_OF`.
    InverseOf,
    /// `owl:TransitiveProperty` declarations → `IS_TRANSITIVE` self-loop.
    TransitiveProperty,
}

impl AxiomRule {
    /// Every rule, in emission order.
    pub const ALL: [AxiomRule; 9] = [
        AxiomRule::PropertyAssertion,
        AxiomRule::SubClassOf,
        AxiomRule::EquivalentClass,
        AxiomRule::Annotation,
        AxiomRule::ClassAssertion,
        AxiomRule::Restriction,
        AxiomRule::DisjointWith,
        AxiomRule::InverseOf,
        AxiomRule::TransitiveProperty,
    ];

    /// Stable name used in logs and reports.
    pub fn category(&self) -> &'static str {
        match self {
            Self::PropertyAssertion => "property_assertion",
            Self::SubClassOf => "sub_class_of",
            Self::EquivalentClass => "equivalent_class",
            Self::Annotation => "annotation",
            Self::ClassAssertion => "class_assertion",
            Self::Restriction => "restriction",
            Self::DisjointWith => "disjoint_with",
            Self::InverseOf => "inverse_of",
            Self::TransitiveProperty => "transitive_property",
        }
    }

    /// Produce the relationship requests for every matching axiom.
    pub fn translate<H: Clone>(
        &self,
        ontology: &Ontology,
        ids: &IdentityMap<H>,
        stats: &mut CategoryStats,
    ) -> Vec<RelationshipRequest<H>> {
        let mut out = Emitter {
            rule: *self,
            stats,
            requests: Vec::new(),
        };

        match self {
            Self::PropertyAssertion => property_assertions(ontology, ids, &mut out),
            Self::SubClassOf => pairs(ontology, ids, rdfs::SUB_CLASS_OF, EdgeType::SubclassOf, &mut out),
            Self::EquivalentClass => pairs(
                ontology,
                ids,
                owl::EQUIVALENT_CLASS,
                EdgeType::EquivalentTo,
                &mut out,
            ),
            Self::Annotation => annotations(ontology, ids, &mut out),
            Self::ClassAssertion => class_assertions(ontology, ids, &mut out),
            Self::Restriction => restrictions(ontology, ids, &mut out),
            Self::DisjointWith => pairs(
                ontology,
                ids,
                owl::DISJOINT_WITH,
                EdgeType::DisjointWith,
                &mut out,
            ),
            Self::InverseOf => pairs(ontology, ids, owl::INVERSE_OF, EdgeType::InverseOf, &mut out),
            Self::TransitiveProperty => transitive_properties(ontology, ids, &mut out),
        }

        out.requests
    }
}

impl std::fmt::Display for AxiomRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

/// Collects requests and keeps the category counters in step.
struct Emitter<'a, H> {
    rule: AxiomRule,
    stats: &'a mut CategoryStats,
    requests: Vec<RelationshipRequest<H>>,
}

impl<H> Emitter<'_, H> {
    fn emit(&mut self, request: RelationshipRequest<H>) {
        self.stats.emitted += 1;
        self.requests.push(request);
    }

    fn skip(&mut self, subject: &Term, object: &Term) {
        self.stats.skipped += 1;
        tracing::debug!(
            category = self.rule.category(),
            subject = %subject,
            object = %object,
            "Skipped axiom with unresolved reference"
        );
    }
}

// ── Rules ────────────────────────────────────────────────────────

/// Node-to-node axioms expressed as a single predicate.
fn pairs<H: Clone>(
    ontology: &Ontology,
    ids: &IdentityMap<H>,
    predicate: &str,
    edge_type: EdgeType,
    out: &mut Emitter<'_, H>,
) {
    for (subject, object) in ontology.subject_objects(predicate) {
        match (ids.handle_of(subject), ids.handle_of(object)) {
            (Some(source), Some(target)) => out.emit(RelationshipRequest::between(
                source.clone(),
                edge_type,
                target.clone(),
            )),
            _ => out.skip(subject, object),
        }
    }
}

fn property_assertions<H: Clone>(ontology: &Ontology, ids: &IdentityMap<H>, out: &mut Emitter<'_, H>) {
    for property in ids.properties() {
        for (subject, object) in ontology.subject_objects(&property.uri) {
            match (ids.handle_of(subject), ids.handle_of(object)) {
                (Some(source), Some(target)) => {
                    let mut properties = RelationshipProperties::new();
                    properties.insert("uri".to_string(), property.uri.clone());
                    properties.insert("comment".to_string(), property.comment.clone());
                    out.emit(RelationshipRequest {
                        source: source.clone(),
                        rel_type: property.label.clone(),
                        target: RelationshipTarget::Node(target.clone()),
                        properties,
                    });
                }
                _ => out.skip(subject, object),
            }
        }
    }
}

fn annotations<H: Clone>(ontology: &Ontology, ids: &IdentityMap<H>, out: &mut Emitter<'_, H>) {
    for (axiom, source) in ontology.subject_objects(owl::ANNOTATED_SOURCE) {
        let predicate = ontology.value(axiom, owl::ANNOTATED_PROPERTY);
        let target = ontology.value(axiom, owl::ANNOTATED_TARGET);

        let (Some(source_handle), Some(predicate), Some(target)) =
            (ids.handle_of(source), predicate, target)
        else {
            out.skip(axiom, source);
            continue;
        };

        let target = match ids.handle_of(target) {
            Some(handle) => RelationshipTarget::Node(handle.clone()),
            None => RelationshipTarget::Value(target.lexical().to_string()),
        };

        out.emit(RelationshipRequest {
            source: source_handle.clone(),
            rel_type: display_name(predicate.lexical()).to_string(),
            target,
            properties: RelationshipProperties::new(),
        });
    }
}

fn class_assertions<H: Clone>(ontology: &Ontology, ids: &IdentityMap<H>, out: &mut Emitter<'_, H>) {
    for (individual, class) in ontology.subject_objects(rdf::TYPE) {
        if class.as_iri() == Some(owl::NAMED_INDIVIDUAL) {
            continue;
        }
        match (ids.handle_of(individual), ids.handle_of(class)) {
            (Some(source), Some(target)) => out.emit(RelationshipRequest::between(
                source.clone(),
                EdgeType::InstanceOf,
                target.clone(),
            )),
            // Declarations such as `x rdf:type owl:Class` are not assertions.
            _ if class.as_iri().is_some_and(vocab::is_builtin) => {}
            _ => out.skip(individual, class),
        }
    }
}

fn restrictions<H: Clone>(ontology: &Ontology, ids: &IdentityMap<H>, out: &mut Emitter<'_, H>) {
    for (class_expr, operands) in ontology.subject_objects(owl::INTERSECTION_OF) {
        let restricted = restricted_classes(ontology, ids, class_expr);
        let members = if ontology.is_list(operands) {
            ontology.list_items(operands)
        } else {
            vec![operands]
        };

        for member in members {
            for (predicate, value) in ontology.predicate_objects(member) {
                let edge_type = match predicate {
                    owl::SOME_VALUES_FROM => EdgeType::RestrictionOn,
                    owl::ALL_VALUES_FROM => EdgeType::OnlyRestrictionOn,
                    _ => continue,
                };
                let on_property = ontology
                    .value(member, owl::ON_PROPERTY)
                    .map(Term::lexical)
                    .unwrap_or_default();

                match ids.handle_of(value) {
                    Some(target) if !restricted.is_empty() => {
                        for source in &restricted {
                            out.emit(
                                RelationshipRequest::between(
                                    (*source).clone(),
                                    edge_type,
                                    target.clone(),
                                )
                                .with_property("on_property", on_property),
                            );
                        }
                    }
                    _ => out.skip(class_expr, value),
                }
            }
        }
    }
}

/// Classes constrained by an intersection: the subject itself when it is a
/// named class, otherwise the named classes defined through it.
fn restricted_classes<'a, H>(
    ontology: &'a Ontology,
    ids: &'a IdentityMap<H>,
    class_expr: &'a Term,
) -> Vec<&'a H> {
    if let Some(handle) = ids.handle_of(class_expr) {
        return vec![handle];
    }
    if !class_expr.is_blank() {
        return Vec::new();
    }
    let mut classes: Vec<&Term> = Vec::new();
    for class in ontology
        .subjects_with(owl::EQUIVALENT_CLASS, class_expr.clone())
        .chain(ontology.subjects_with(rdfs::SUB_CLASS_OF, class_expr.clone()))
    {
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    classes
        .into_iter()
        .filter_map(|class| ids.handle_of(class))
        .collect()
}

fn transitive_properties<H: Clone>(
    ontology: &Ontology,
    ids: &IdentityMap<H>,
    out: &mut Emitter<'_, H>,
) {
    for property in ontology.subjects_of_type(owl::TRANSITIVE_PROPERTY) {
        match ids.handle_of(property) {
            Some(handle) => out.emit(RelationshipRequest::between(
                handle.clone(),
                EdgeType::IsTransitive,
                handle.clone(),
            )),
            None => out.skip(property, property),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ex, parse, uri_identities};

    fn run(rule: AxiomRule, body: &str) -> (Vec<RelationshipRequest<String>>, CategoryStats) {
        let ont = parse(body);
        let ids = uri_identities(&ont);
        let mut stats = CategoryStats::default();
        let requests = rule.translate(&ont, &ids, &mut stats);
        (requests, stats)
    }

    fn node(name: &str) -> RelationshipTarget<String> {
        RelationshipTarget::Node(ex(name))
    }

    #[test]
    fn test_property_assertion_uses_property_label_and_metadata() {
        let (reqs, stats) = run(
            AxiomRule::PropertyAssertion,
            r#"
            ex:Rex a owl:NamedIndividual .
            ex:Bone a owl:NamedIndividual .
            ex:chews a owl:ObjectProperty ; rdfs:label "chews on" ; rdfs:comment "Dental activity" .
            ex:Rex ex:chews ex:Bone .
            "#,
        );
        assert_eq!(stats, CategoryStats { emitted: 1, skipped: 0 });
        assert_eq!(reqs[0].source, ex("Rex"));
        assert_eq!(reqs[0].rel_type, "chews on");
        assert_eq!(reqs[0].target, node("Bone"));
        assert_eq!(reqs[0].properties["uri"], ex("chews"));
        assert_eq!(reqs[0].properties["comment"], "Dental activity");
    }

    #[test]
    fn test_property_assertion_fallback_label_and_literal_skip() {
        let (reqs, stats) = run(
            AxiomRule::PropertyAssertion,
            r#"
            ex:Rex a owl:NamedIndividual .
            ex:Bone a owl:NamedIndividual .
            ex:chews a owl:ObjectProperty .
            ex:weight a owl:DatatypeProperty .
            ex:Rex ex:chews ex:Bone .
            ex:Rex ex:weight "30" .
            ex:Ghost ex:chews ex:Bone .
            "#,
        );
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].rel_type, "chews");
        assert_eq!(reqs[0].properties["comment"], "");
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn test_undeclared_predicates_are_not_property_assertions() {
        let (reqs, stats) = run(
            AxiomRule::PropertyAssertion,
            r#"
            ex:Rex a owl:NamedIndividual .
            ex:Bone a owl:NamedIndividual .
            ex:Rex ex:likes ex:Bone .
            "#,
        );
        assert!(reqs.is_empty());
        assert_eq!(stats, CategoryStats::default());
    }

    #[test]
    fn test_sub_class_of() {
        let (reqs, stats) = run(
            AxiomRule::SubClassOf,
            r#"
            ex:Animal a owl:Class ; rdfs:label "Animal" .
            ex:Dog a owl:Class ; rdfs:subClassOf ex:Animal .
            "#,
        );
        assert_eq!(stats.emitted, 1);
        assert_eq!(reqs[0].source, ex("Dog"));
        assert_eq!(reqs[0].rel_type, "SUBCLASS_OF");
        assert_eq!(reqs[0].target, node("Animal"));
        assert!(reqs[0].properties.is_empty());
    }

    #[test]
    fn test_sub_class_of_unresolved_is_skipped() {
        let (reqs, stats) = run(
            AxiomRule::SubClassOf,
            r#"
            ex:Animal a owl:Class .
            ex:Cat rdfs:subClassOf ex:Animal .
            "#,
        );
        assert!(reqs.is_empty());
        assert_eq!(stats, CategoryStats { emitted: 0, skipped: 1 });
    }

    #[test]
    fn test_equivalent_class() {
        let (reqs, _) = run(
            AxiomRule::EquivalentClass,
            r#"
            ex:Dog a owl:Class .
            ex:Canine a owl:Class ; owl:equivalentClass ex:Dog .
            "#,
        );
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].source, ex("Canine"));
        assert_eq!(reqs[0].rel_type, "EQUIVALENT_TO");
        assert_eq!(reqs[0].target, node("Dog"));
    }

    #[test]
    fn test_annotation_targets_literal_value() {
        let (reqs, stats) = run(
            AxiomRule::Annotation,
            r#"
            ex:Dog a owl:Class ; rdfs:label "Dog" .
            [] a owl:Axiom ;
               owl:annotatedSource ex:Dog ;
               owl:annotatedProperty rdfs:label ;
               owl:annotatedTarget "Dog" ;
               rdfs:comment "Common name" .
            "#,
        );
        assert_eq!(stats.emitted, 1);
        assert_eq!(reqs[0].source, ex("Dog"));
        assert_eq!(reqs[0].rel_type, "label");
        assert_eq!(reqs[0].target, RelationshipTarget::Value("Dog".to_string()));
    }

    #[test]
    fn test_annotation_targets_resolved_node() {
        let (reqs, _) = run(
            AxiomRule::Annotation,
            r#"
            ex:Dog a owl:Class .
            ex:Animal a owl:Class .
            ex:Dog rdfs:subClassOf ex:Animal .
            [] a owl:Axiom ;
               owl:annotatedSource ex:Dog ;
               owl:annotatedProperty rdfs:subClassOf ;
               owl:annotatedTarget ex:Animal .
            "#,
        );
        assert_eq!(reqs[0].rel_type, "subClassOf");
        assert_eq!(reqs[0].target, node("Animal"));
    }

    #[test]
    fn test_annotation_source_is_annotated_entity_not_axiom() {
        let (reqs, stats) = run(
            AxiomRule::Annotation,
            r#"
            ex:Cat a owl:Class .
            ex:ax1 a owl:NamedIndividual ;
               owl:annotatedSource ex:Cat ;
               owl:annotatedProperty rdfs:label ;
               owl:annotatedTarget "Cat" .
            "#,
        );
        assert_eq!(stats, CategoryStats { emitted: 1, skipped: 0 });
        assert_eq!(reqs[0].source, ex("Cat"));
        assert_eq!(reqs[0].target, RelationshipTarget::Value("Cat".to_string()));
    }

    #[test]
    fn test_annotation_unresolved_or_incomplete_is_skipped() {
        let (reqs, stats) = run(
            AxiomRule::Annotation,
            r#"
            ex:Dog a owl:Class .
            [] owl:annotatedSource ex:Cat ;
               owl:annotatedProperty rdfs:label ;
               owl:annotatedTarget "Cat" .
            [] owl:annotatedSource ex:Dog ;
               owl:annotatedProperty rdfs:label .
            "#,
        );
        assert!(reqs.is_empty());
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn test_class_assertion() {
        let (reqs, stats) = run(
            AxiomRule::ClassAssertion,
            r#"
            ex:Dog a owl:Class .
            ex:Rex a owl:NamedIndividual , ex:Dog .
            ex:Tom a owl:NamedIndividual , ex:Cat .
            "#,
        );
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].source, ex("Rex"));
        assert_eq!(reqs[0].rel_type, "INSTANCE_OF");
        assert_eq!(reqs[0].target, node("Dog"));
        // Only the undeclared ex:Cat assertion counts; declarations do not.
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_class_assertion_never_targets_named_individual_marker() {
        let (reqs, _) = run(
            AxiomRule::ClassAssertion,
            r#"
            owl:NamedIndividual a owl:Class .
            ex:Rex a owl:NamedIndividual .
            "#,
        );
        assert!(reqs.is_empty());
    }

    #[test]
    fn test_some_values_restriction_on_named_class() {
        let (reqs, stats) = run(
            AxiomRule::Restriction,
            r#"
            ex:Person a owl:Class .
            ex:Parent a owl:Class ;
                owl:intersectionOf ( ex:Person
                    [ a owl:Restriction ; owl:onProperty ex:hasChild ; owl:someValuesFrom ex:Person ] ) .
            "#,
        );
        assert_eq!(stats, CategoryStats { emitted: 1, skipped: 0 });
        assert_eq!(reqs[0].source, ex("Parent"));
        assert_eq!(reqs[0].rel_type, "RESTRICTION_ON");
        assert_eq!(reqs[0].target, node("Person"));
        assert_eq!(reqs[0].properties["on_property"], ex("hasChild"));
    }

    #[test]
    fn test_all_values_restriction_through_equivalent_class() {
        let (reqs, _) = run(
            AxiomRule::Restriction,
            r#"
            ex:Meat a owl:Class .
            ex:Carnivore a owl:Class ;
                owl:equivalentClass [
                    a owl:Class ;
                    owl:intersectionOf ( ex:Animal
                        [ a owl:Restriction ; owl:onProperty ex:eats ; owl:allValuesFrom ex:Meat ] )
                ] .
            "#,
        );
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].source, ex("Carnivore"));
        assert_eq!(reqs[0].rel_type, "ONLY_RESTRICTION_ON");
        assert_eq!(reqs[0].target, node("Meat"));
    }

    #[test]
    fn test_restriction_reached_through_two_axioms_emits_once() {
        let (reqs, stats) = run(
            AxiomRule::Restriction,
            r#"
            ex:Meat a owl:Class .
            ex:Carnivore a owl:Class ;
                owl:equivalentClass _:def ;
                rdfs:subClassOf _:def .
            _:def a owl:Class ;
                owl:intersectionOf (
                    [ a owl:Restriction ; owl:onProperty ex:eats ; owl:someValuesFrom ex:Meat ] ) .
            "#,
        );
        assert_eq!(stats.emitted, 1);
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].source, ex("Carnivore"));
        assert_eq!(reqs[0].target, node("Meat"));
    }

    #[test]
    fn test_restriction_with_unresolved_value_class_is_skipped() {
        let (reqs, stats) = run(
            AxiomRule::Restriction,
            r#"
            ex:Parent a owl:Class ;
                owl:intersectionOf ( [ owl:onProperty ex:hasChild ; owl:someValuesFrom ex:Human ] ) .
            "#,
        );
        assert!(reqs.is_empty());
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_restriction_without_on_property_has_empty_property() {
        let (reqs, _) = run(
            AxiomRule::Restriction,
            r#"
            ex:Person a owl:Class .
            ex:Parent a owl:Class ;
                owl:intersectionOf [ owl:someValuesFrom ex:Person ] .
            "#,
        );
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].properties["on_property"], "");
    }

    #[test]
    fn test_disjoint_with() {
        let (reqs, _) = run(
            AxiomRule::DisjointWith,
            r#"
            ex:Dog a owl:Class .
            ex:Cat a owl:Class ; owl:disjointWith ex:Dog .
            "#,
        );
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].source, ex("Cat"));
        assert_eq!(reqs[0].rel_type, "DISJOINT_WITH");
        assert_eq!(reqs[0].target, node("Dog"));
    }

    #[test]
    fn test_inverse_of_requires_property_nodes() {
        let (reqs, stats) = run(
            AxiomRule::InverseOf,
            r#"
            ex:hasParent a owl:ObjectProperty , owl:NamedIndividual .
            ex:hasChild a owl:ObjectProperty , owl:NamedIndividual ;
                owl:inverseOf ex:hasParent .
            ex:eats a owl:ObjectProperty .
            ex:eatenBy a owl:ObjectProperty ; owl:inverseOf ex:eats .
            "#,
        );
        assert_eq!(stats, CategoryStats { emitted: 1, skipped: 1 });
        assert_eq!(reqs[0].source, ex("hasChild"));
        assert_eq!(reqs[0].rel_type, "INVERSE_OF");
        assert_eq!(reqs[0].target, node("hasParent"));
    }

    #[test]
    fn test_transitive_property_self_loop() {
        let (reqs, stats) = run(
            AxiomRule::TransitiveProperty,
            r#"
            ex:ancestorOf a owl:ObjectProperty , owl:TransitiveProperty , owl:NamedIndividual .
            ex:partOf a owl:ObjectProperty , owl:TransitiveProperty .
            "#,
        );
        assert_eq!(stats, CategoryStats { emitted: 1, skipped: 1 });
        assert_eq!(reqs[0].source, ex("ancestorOf"));
        assert_eq!(reqs[0].rel_type, "IS_TRANSITIVE");
        assert_eq!(reqs[0].target, node("ancestorOf"));
    }

    #[test]
    fn test_all_rules_in_table_order() {
        let names: Vec<_> = AxiomRule::ALL.iter().map(AxiomRule::category).collect();
        assert_eq!(
            names,
            vec![
                "property_assertion",
                "sub_class_of",
                "equivalent_class",
                "annotation",
                "class_assertion",
                "restriction",
                "disjoint_with",
                "inverse_of",
                "transitive_property",
            ]
        );
    }
}
