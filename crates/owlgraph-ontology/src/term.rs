//! RDF terms and triples as held by the ontology model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RDF term in subject or object position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Iri(String),
    Blank(String),
    Literal {
        value: String,
        datatype: Option<String>,
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Self::Blank(id.into())
    }

    /// A plain literal without datatype or language tag.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// The IRI if this term is a named node.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }

    /// Lexical form: the IRI, the blank node id, or the literal value.
    pub fn lexical(&self) -> &str {
        match self {
            Self::Iri(iri) => iri,
            Self::Blank(id) => id,
            Self::Literal { value, .. } => value,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Blank(id) => write!(f, "_:{id}"),
            Self::Literal {
                value, language, ..
            } => match language {
                Some(lang) => write!(f, "{value:?}@{lang}"),
                None => write!(f, "{value:?}"),
            },
        }
    }
}

impl From<oxrdf::Term> for Term {
    #[allow(unreachable_patterns)]
    fn from(term: oxrdf::Term) -> Self {
        match term {
            oxrdf::Term::NamedNode(node) => Self::Iri(node.into_string()),
            oxrdf::Term::BlankNode(node) => Self::Blank(node.as_str().to_string()),
            oxrdf::Term::Literal(lit) => Self::Literal {
                value: lit.value().to_string(),
                datatype: Some(lit.datatype().as_str().to_string()),
                language: lit.language().map(str::to_string),
            },
            // Quoted triples only exist with RDF 1.2 enabled; keep their text form.
            other => Self::Blank(other.to_string()),
        }
    }
}

/// A single asserted statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl From<oxrdf::Quad> for Triple {
    fn from(quad: oxrdf::Quad) -> Self {
        Self {
            subject: oxrdf::Term::from(quad.subject).into(),
            predicate: quad.predicate.into_string(),
            object: quad.object.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_forms() {
        assert_eq!(Term::iri("http://example.org/zoo#Dog").lexical(), "http://example.org/zoo#Dog");
        assert_eq!(Term::blank("b0").lexical(), "b0");
        assert_eq!(Term::literal("Dog").lexical(), "Dog");
        assert_eq!(Term::literal("Dog").as_iri(), None);
    }

    #[test]
    fn test_from_oxrdf_literal_keeps_language() {
        let lit = oxrdf::Literal::new_language_tagged_literal_unchecked("Hund", "de");
        let term = Term::from(oxrdf::Term::from(lit));
        match term {
            Term::Literal {
                value, language, ..
            } => {
                assert_eq!(value, "Hund");
                assert_eq!(language.as_deref(), Some("de"));
            }
            other => panic!("expected literal, got {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::iri("http://example.org/a").to_string(), "<http://example.org/a>");
        assert_eq!(Term::blank("x").to_string(), "_:x");
        assert_eq!(Term::literal("a").to_string(), "\"a\"");
    }
}
