//! Ontology document loading.
//!
//! Parsing is delegated to `oxrdfio`. Quads from named graphs are merged into
//! a single triple set.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use oxrdfio::{RdfFormat, RdfParser};
use serde::Deserialize;

use crate::error::{OntologyError, Result};
use crate::model::Ontology;
use crate::term::Triple;

/// Supported serializations.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RdfSyntax {
    Turtle,
    NTriples,
    NQuads,
    TriG,
    N3,
    RdfXml,
}

impl RdfSyntax {
    /// Infer the syntax from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ttl" | "turtle" => Some(Self::Turtle),
            "nt" => Some(Self::NTriples),
            "nq" => Some(Self::NQuads),
            "trig" => Some(Self::TriG),
            "n3" => Some(Self::N3),
            "owl" | "rdf" | "xml" => Some(Self::RdfXml),
            _ => None,
        }
    }

    /// Infer the syntax from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    fn format(&self) -> RdfFormat {
        match self {
            Self::Turtle => RdfFormat::Turtle,
            Self::NTriples => RdfFormat::NTriples,
            Self::NQuads => RdfFormat::NQuads,
            Self::TriG => RdfFormat::TriG,
            Self::N3 => RdfFormat::N3,
            Self::RdfXml => RdfFormat::RdfXml,
        }
    }
}

impl FromStr for RdfSyntax {
    type Err = OntologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" => Ok(Self::Turtle),
            "ntriples" | "n-triples" => Ok(Self::NTriples),
            "nquads" | "n-quads" => Ok(Self::NQuads),
            "n3" => Ok(Self::N3),
            "rdfxml" | "rdf/xml" | "rdf-xml" => Ok(Self::RdfXml),
            other => Self::from_extension(other)
                .ok_or_else(|| OntologyError::UnsupportedSyntax(s.to_string())),
        }
    }
}

/// Reads ontology documents into an [`Ontology`].
#[derive(Debug, Clone, Default)]
pub struct OntologyLoader {
    syntax: Option<RdfSyntax>,
    base_iri: Option<String>,
}

impl OntologyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a syntax instead of inferring it from the file extension.
    pub fn with_syntax(mut self, syntax: RdfSyntax) -> Self {
        self.syntax = Some(syntax);
        self
    }

    /// Base IRI used to resolve relative IRIs in the document.
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    /// Load and parse a document from disk.
    pub fn load_path(&self, path: &Path) -> Result<Ontology> {
        let shown = path.display().to_string();
        let syntax = self
            .syntax
            .or_else(|| RdfSyntax::from_path(path))
            .ok_or_else(|| OntologyError::UnknownSyntax {
                path: shown.clone(),
            })?;

        let file = File::open(path).map_err(|source| OntologyError::Read {
            path: shown.clone(),
            source,
        })?;

        let ontology = self.parse_reader(BufReader::new(file), syntax)?;
        tracing::info!(
            path = %shown,
            syntax = ?syntax,
            triples = ontology.len(),
            "Ontology loaded"
        );
        Ok(ontology)
    }

    /// Parse a document held in memory.
    pub fn parse_str(&self, text: &str, syntax: RdfSyntax) -> Result<Ontology> {
        self.parse_reader(text.as_bytes(), syntax)
    }

    /// Parse a document from any reader.
    pub fn parse_reader<R: Read>(&self, reader: R, syntax: RdfSyntax) -> Result<Ontology> {
        let mut parser = RdfParser::from_format(syntax.format());
        if let Some(base) = &self.base_iri {
            parser = parser
                .with_base_iri(base.as_str())
                .map_err(|e| OntologyError::InvalidBaseIri {
                    iri: base.clone(),
                    reason: e.to_string(),
                })?;
        }

        let mut ontology = Ontology::new();
        for quad in parser.for_reader(reader) {
            ontology.insert(Triple::from(quad?));
        }
        Ok(ontology)
    }
}
