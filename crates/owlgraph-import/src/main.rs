//! CLI entry point for the owlgraph ontology importer.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use owlgraph_core::MemorySink;
use owlgraph_graph::{GraphClient, Neo4jSink};
use owlgraph_import::config::{load_settings, Settings};
use owlgraph_import::Importer;
use owlgraph_ontology::{OntologyLoader, RdfSyntax};

#[derive(Parser)]
#[command(name = "owlgraph-import")]
#[command(about = "Import an OWL ontology into Neo4j as a property graph")]
struct Cli {
    /// Path to the ontology document.
    ontology: PathBuf,

    /// RDF syntax: turtle, ntriples, nquads, trig, n3, rdfxml (default: from extension).
    #[arg(short, long)]
    format: Option<String>,

    /// Base IRI for resolving relative IRIs.
    #[arg(long)]
    base_iri: Option<String>,

    /// Neo4j connection URI (e.g., bolt://localhost:7687).
    #[arg(long)]
    uri: Option<String>,

    /// Neo4j username.
    #[arg(short, long)]
    user: Option<String>,

    /// Neo4j password.
    #[arg(short, long)]
    password: Option<String>,

    /// Statements per transaction.
    #[arg(long)]
    batch_size: Option<usize>,

    /// Delete every node and relationship before importing.
    #[arg(long)]
    wipe: bool,

    /// Translate without connecting; print the graph as JSON.
    #[arg(long)]
    dry_run: bool,

    /// Config file prefix (default: owlgraph).
    #[arg(short, long, default_value = "owlgraph")]
    config: String,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    let mut settings = load_settings(&cli.config)?;
    apply_overrides(&cli, &mut settings)?;

    // Parse everything up front: a malformed document must fail before any write.
    let ontology = build_loader(&settings).load_path(&cli.ontology)?;

    if cli.dry_run {
        let mut importer = Importer::new(MemorySink::new());
        let report = importer.run(&ontology).await?;
        let graph = importer.into_sink();
        let output = serde_json::json!({ "report": report, "graph": graph });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let client = GraphClient::connect(&settings.neo4j).await?;
    if cli.wipe {
        client.wipe().await?;
    }

    let sink = Neo4jSink::new(client).with_batch_size(settings.import.batch_size);
    let mut importer = Importer::new(sink);
    let report = importer.run(&ontology).await?;

    tracing::info!(
        nodes = report.nodes,
        relationships = report.relationships(),
        skipped = report.skipped(),
        "Import finished"
    );
    println!(
        "Ontology imported into Neo4j: {} nodes, {} relationships",
        report.nodes,
        report.relationships()
    );

    Ok(())
}

/// CLI flags take precedence over file and environment settings.
fn apply_overrides(cli: &Cli, settings: &mut Settings) -> anyhow::Result<()> {
    if let Some(format) = &cli.format {
        settings.import.format = Some(format.parse::<RdfSyntax>()?);
    }
    if let Some(base_iri) = &cli.base_iri {
        settings.import.base_iri = Some(base_iri.clone());
    }
    if let Some(uri) = &cli.uri {
        settings.neo4j.uri = uri.clone();
    }
    if let Some(user) = &cli.user {
        settings.neo4j.user = user.clone();
    }
    if let Some(password) = &cli.password {
        settings.neo4j.password = password.clone();
    }
    if let Some(batch_size) = cli.batch_size {
        if batch_size == 0 {
            anyhow::bail!("--batch-size must be at least 1");
        }
        settings.import.batch_size = batch_size;
    }
    Ok(())
}

fn build_loader(settings: &Settings) -> OntologyLoader {
    let mut loader = OntologyLoader::new();
    if let Some(syntax) = settings.import.format {
        loader = loader.with_syntax(syntax);
    }
    if let Some(base_iri) = &settings.import.base_iri {
        loader = loader.with_base_iri(base_iri.clone());
    }
    loader
}
