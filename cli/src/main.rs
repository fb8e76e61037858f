use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::TextMatcher;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: String,
    description: String,
}

#[derive(Serialize)]
struct RankedHit<'a> {
    id: &'a str,
    #[serde(flatten)]
    hit: engine::Match,
}

#[derive(Parser)]
#[command(name = "lostfound-match")]
#[command(about = "Rank item descriptions by lexical similarity to a query", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a corpus of item records and print the best matches for a query
    Match {
        /// JSON file holding an array of {"id", "description"} records
        #[arg(long)]
        corpus: String,
        /// Query text
        #[arg(long)]
        query: String,
        /// Number of matches to return
        #[arg(long, default_value_t = 5)]
        top_k: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { corpus, query, top_k } => run_match(&corpus, &query, top_k),
    }
}

fn run_match(corpus_path: &str, query: &str, top_k: usize) -> Result<()> {
    let file = File::open(corpus_path).with_context(|| format!("open corpus file {corpus_path}"))?;
    let records: Vec<ItemRecord> = serde_json::from_reader(BufReader::new(file))
        .context("corpus must be a JSON array of {id, description} records")?;
    let descriptions: Vec<&str> = records.iter().map(|r| r.description.as_str()).collect();

    let matcher = TextMatcher::new();
    matcher.fit(&descriptions);
    tracing::info!(num_docs = matcher.num_docs(), num_terms = matcher.num_terms(), "corpus fitted");

    for hit in matcher.query(query, top_k)? {
        let line = serde_json::to_string(&RankedHit { id: &records[hit.position].id, hit })?;
        println!("{line}");
    }
    Ok(())
}
