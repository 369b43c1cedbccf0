//! Three-way reconciliation of catalog make and model names.
//!
//! This module implements the core matching process:
//!
//! - [`WorkingSet`]: a source's name set with explicit, replayable consumption
//! - [`reconcile_makes`]: the four-stage make-level reconciler
//! - [`reconcile_models`]: the same stages scoped to one resolved make
//! - [`reconcile_snapshot`]: the per-run pipeline over a full snapshot
//!
//! ## Matching stages
//!
//! Every reconciliation runs the same four stages, strictly in order:
//!
//! 1. **Exact**: a name spelled identically (case-sensitive) in all three
//!    catalogs.
//! 2. **Automatic**: case-insensitive equality, first match in ascending
//!    sort order, sequential consumption without backtracking.
//! 3. **Manual rules**: operator overrides, emitted unconditionally with
//!    best-effort removal from the working sets.
//! 4. **Residual**: whatever remains, reported per source and aligned only
//!    by sorted position.
//!
//! A name consumed by one stage is never visible to a later stage, and no
//! source spelling is consumed twice. The reconcilers are pure functions:
//! they emit events for the report instead of writing to the console, and
//! identical inputs yield identical outcomes.

pub mod makes;
pub mod models;
pub mod working;

use serde::Serialize;

use crate::catalog::snapshot::CatalogSnapshot;
use crate::core::rules::RuleSet;

pub use makes::{reconcile_makes, MakeOutcome};
pub use models::{reconcile_models, ModelOutcome};
pub use working::{Residual, WorkingSet};

/// Everything one reconciliation run produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Make-level cross-reference, events, and residual
    pub makes: MakeOutcome,

    /// One model-level outcome per resolved make, in resolution order
    pub models: Vec<ModelOutcome>,
}

/// Reconcile a full catalog snapshot: makes first, then each resolved
/// make's models, in resolution order.
pub fn reconcile_snapshot(snapshot: &CatalogSnapshot, rules: &RuleSet) -> RunOutcome {
    let av_makes: Vec<&str> = snapshot.av.iter().map(|e| e.make.as_str()).collect();
    let au_makes: Vec<&str> = snapshot.au.iter().map(|e| e.make.as_str()).collect();
    let dr_makes: Vec<&str> = snapshot.dr.iter().map(|e| e.make.as_str()).collect();

    let makes = reconcile_makes(&av_makes, &au_makes, &dr_makes, &rules.makes);

    let models = makes
        .xrefs
        .iter()
        .map(|make| {
            reconcile_models(make, &snapshot.av, &snapshot.au, &snapshot.dr, &rules.models)
        })
        .collect();

    RunOutcome { makes, models }
}
