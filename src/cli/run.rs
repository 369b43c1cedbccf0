use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::catalog::snapshot::CatalogSnapshot;
use crate::cli::OutputFormat;
use crate::fetch::{self, CatalogUrls};

#[derive(Args)]
pub struct RunArgs {
    /// URL of the av-style catalog document
    #[arg(long, required = true)]
    pub av_url: String,

    /// URL of the au-style catalog document
    #[arg(long, required = true)]
    pub au_url: String,

    /// URL of the dr-style catalog document
    #[arg(long, required = true)]
    pub dr_url: String,

    /// Operator rule file (JSON with "makes" and "models" lists)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Persist the cross-reference tables to this JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-download timeout in seconds
    #[arg(long, default_value = "300")]
    pub timeout_secs: u64,
}

/// Execute the run subcommand: download all three catalogs into a temporary
/// directory, reconcile them, and drop the directory (and the downloaded
/// files with it) when done.
///
/// # Errors
///
/// Returns an error if any download fails or times out, the rule file is
/// invalid, or the store cannot be written.
pub fn run(args: RunArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rules = super::load_rules(args.rules.as_deref())?;

    let urls = CatalogUrls {
        av: args.av_url.clone(),
        au: args.au_url.clone(),
        dr: args.dr_url.clone(),
    };

    let dir = tempfile::tempdir()?;
    let rt = tokio::runtime::Runtime::new()?;
    let fetched = rt.block_on(fetch::fetch_all(
        &urls,
        dir.path(),
        Duration::from_secs(args.timeout_secs),
    ))?;

    let snapshot = CatalogSnapshot::load(&fetched.av, &fetched.au, &fetched.dr);
    super::execute(&snapshot, &rules, format, verbose, args.output.as_deref())
}
