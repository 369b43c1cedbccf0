use std::path::PathBuf;

use clap::Args;

use crate::catalog::snapshot::CatalogSnapshot;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct ReconcileArgs {
    /// av-style catalog file (Catalog/Make/Model)
    #[arg(long, required = true)]
    pub av: PathBuf,

    /// au-style catalog file (catalog/mark/folder)
    #[arg(long, required = true)]
    pub au: PathBuf,

    /// dr-style catalog file (References with Marks/Models tables)
    #[arg(long, required = true)]
    pub dr: PathBuf,

    /// Operator rule file (JSON with "makes" and "models" lists)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Persist the cross-reference tables to this JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the reconcile subcommand
///
/// # Errors
///
/// Returns an error if the rule file is invalid or the store cannot be
/// written; an unreadable catalog degrades to empty instead of failing.
pub fn run(args: ReconcileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rules = super::load_rules(args.rules.as_deref())?;
    let snapshot = CatalogSnapshot::load(&args.av, &args.au, &args.dr);
    super::execute(&snapshot, &rules, format, verbose, args.output.as_deref())
}
