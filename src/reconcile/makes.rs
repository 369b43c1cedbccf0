use serde::Serialize;

use crate::core::rules::MakeRule;
use crate::core::types::{MatchEvent, MatchStage};
use crate::core::xref::MakeXref;
use crate::reconcile::working::{Residual, WorkingSet};

/// Result of reconciling the three make-name sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakeOutcome {
    /// Canonical make cross-reference rows, in resolution order
    pub xrefs: Vec<MakeXref>,

    /// Report events in resolution order, residual rows last
    pub events: Vec<MatchEvent>,

    /// Make names left unresolved per source
    pub residual: Residual,
}

/// Reconcile the three catalogs' make names.
///
/// Inputs are reduced to distinct values and sorted before matching. Stages
/// run strictly in order — exact, automatic (case-insensitive), manual rules,
/// residual — and an entry consumed by one stage is invisible to the rest.
pub fn reconcile_makes<S: AsRef<str>>(
    av_makes: &[S],
    au_makes: &[S],
    dr_makes: &[S],
    rules: &[MakeRule],
) -> MakeOutcome {
    let mut av = WorkingSet::from_names(av_makes.iter().map(AsRef::as_ref));
    let mut au = WorkingSet::from_names(au_makes.iter().map(AsRef::as_ref));
    let mut dr = WorkingSet::from_names(dr_makes.iter().map(AsRef::as_ref));

    let mut xrefs = Vec::new();
    let mut events = Vec::new();

    // Stage 1: exact. A make spelled identically in all three sets.
    for name in av.remaining() {
        if au.contains(&name) && dr.contains(&name) {
            av.consume(&name);
            au.consume(&name);
            dr.consume(&name);
            xrefs.push(MakeXref::new(&name, &name, &name));
            events.push(MatchEvent::new(MatchStage::Common, &name, &name, &name));
        }
    }

    // Stage 2: automatic. For each remaining AV entry in ascending order,
    // the first unconsumed case-insensitive match in AU and in DR. Both must
    // exist before anything is consumed; first match wins, no backtracking.
    for av_name in av.remaining() {
        let au_name = au.find_ignore_case(&av_name).map(str::to_string);
        let dr_name = dr.find_ignore_case(&av_name).map(str::to_string);
        if let (Some(au_name), Some(dr_name)) = (au_name, dr_name) {
            av.consume(&av_name);
            au.consume(&au_name);
            dr.consume(&dr_name);
            xrefs.push(MakeXref::new(&av_name, &au_name, &dr_name));
            events.push(MatchEvent::new(
                MatchStage::Automatic,
                &av_name,
                &au_name,
                &dr_name,
            ));
        }
    }

    // Stage 3: manual rules. Emitted unconditionally — even when the target
    // was already resolved automatically — with best-effort removal of the
    // rule's spellings from the working sets.
    for rule in rules {
        xrefs.push(MakeXref::new(&rule.av_name, &rule.au_name, &rule.dr_name));
        events.push(MatchEvent::new(
            MatchStage::ManualRule,
            &rule.av_name,
            &rule.au_name,
            &rule.dr_name,
        ));
        av.consume(&rule.av_name);
        au.consume(&rule.au_name);
        dr.consume(&rule.dr_name);
    }

    // Stage 4: residual, aligned by sorted position only.
    let residual = Residual {
        av: av.remaining(),
        au: au.remaining(),
        dr: dr.remaining(),
    };
    for [av_name, au_name, dr_name] in residual.rows() {
        events.push(MatchEvent::new(
            MatchStage::Unresolved,
            av_name,
            au_name,
            dr_name,
        ));
    }

    MakeOutcome {
        xrefs,
        events,
        residual,
    }
}
