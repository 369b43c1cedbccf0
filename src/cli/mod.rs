//! Command-line interface for car-xref.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **reconcile**: Reconcile three already-downloaded catalog files
//! - **run**: Download the three catalogs, then reconcile them
//!
//! ## Usage
//!
//! ```text
//! # Reconcile local catalog files and print the report
//! car-xref reconcile --av av-style.xml --au au-style.xml --dr dr-style.xml
//!
//! # Apply operator rules and persist the cross-reference tables
//! car-xref reconcile --av av.xml --au au.xml --dr dr.xml \
//!     --rules rules.json --output xref.json
//!
//! # Download and reconcile in one run
//! car-xref run --av-url https://... --au-url https://... --dr-url https://...
//!
//! # JSON outcome for scripting
//! car-xref reconcile --av av.xml --au au.xml --dr dr.xml --format json
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::snapshot::CatalogSnapshot;
use crate::core::rules::RuleSet;
use crate::reconcile::{reconcile_snapshot, RunOutcome};
use crate::report::render_report;
use crate::store::XrefStore;

pub mod reconcile;
pub mod run;

#[derive(Parser)]
#[command(name = "car-xref")]
#[command(version)]
#[command(about = "Reconcile vehicle make/model names across three reference catalogs")]
#[command(
    long_about = "car-xref builds a canonical cross-reference between three vehicle catalogs that spell the same makes and models differently.\n\nMatching is deterministic: exact equality first, then case-insensitive equality, then operator-maintained manual rules; whatever remains is reported per source as unresolved."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile three local catalog files
    Reconcile(reconcile::ReconcileArgs),

    /// Download the three catalogs, then reconcile them
    Run(run::RunArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the optional operator rule file, defaulting to no rules
fn load_rules(path: Option<&Path>) -> anyhow::Result<RuleSet> {
    match path {
        Some(path) => Ok(RuleSet::load_from_file(path)?),
        None => Ok(RuleSet::default()),
    }
}

/// Reconcile a snapshot, emit the outcome in the chosen format, and persist
/// the cross-reference tables when an output path is given.
fn execute(
    snapshot: &CatalogSnapshot,
    rules: &RuleSet,
    format: OutputFormat,
    verbose: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    if verbose {
        eprintln!(
            "Parsed {} av-style, {} au-style, {} dr-style entries",
            snapshot.av.len(),
            snapshot.au.len(),
            snapshot.dr.len(),
        );
    }

    let outcome = reconcile_snapshot(snapshot, rules);

    match format {
        OutputFormat::Text => print!("{}", render_report(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    if let Some(path) = output {
        let store = store_from_outcome(&outcome);
        store.save(path)?;
        if verbose {
            eprintln!(
                "Persisted {} make rows and {} model rows to {}",
                store.makes.len(),
                store.models.len(),
                path.display()
            );
        }
    }

    Ok(())
}

fn store_from_outcome(outcome: &RunOutcome) -> XrefStore {
    let makes = outcome.makes.xrefs.clone();
    let models = outcome
        .models
        .iter()
        .flat_map(|m| m.xrefs.iter().cloned())
        .collect();
    XrefStore::new(makes, models)
}
