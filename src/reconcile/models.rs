use serde::Serialize;

use crate::core::entry::CatalogEntry;
use crate::core::rules::ModelRule;
use crate::core::types::{MatchEvent, MatchStage};
use crate::core::xref::{MakeXref, ModelXref};
use crate::reconcile::working::{eq_ignore_case, Residual, WorkingSet};

/// Result of reconciling one canonical make's models
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelOutcome {
    /// The make these models belong to
    pub make: MakeXref,

    /// Canonical model cross-reference rows, in resolution order
    pub xrefs: Vec<ModelXref>,

    /// Report events in resolution order, residual rows last
    pub events: Vec<MatchEvent>,

    /// Model names left unresolved per source for this make
    pub residual: Residual,
}

/// Reconcile the three catalogs' models for one resolved make.
///
/// Each catalog is first filtered to the entries whose make equals, ignoring
/// case, that catalog's spelling from the [`MakeXref`]; the four matching
/// stages then run exactly as at make level, on fresh working sets private
/// to this invocation.
pub fn reconcile_models(
    make: &MakeXref,
    av_entries: &[CatalogEntry],
    au_entries: &[CatalogEntry],
    dr_entries: &[CatalogEntry],
    rules: &[ModelRule],
) -> ModelOutcome {
    let mut av = WorkingSet::from_names(models_of(av_entries, &make.av_name));
    let mut au = WorkingSet::from_names(models_of(au_entries, &make.au_name));
    let mut dr = WorkingSet::from_names(models_of(dr_entries, &make.dr_name));

    let mut xrefs = Vec::new();
    let mut events = Vec::new();

    // Stage 1: exact. Candidates are the distinct sorted model names of the
    // FULL AV catalog; a candidate is common when present verbatim in the
    // filtered AU and DR sets. The AV set's own membership is not re-checked
    // beyond having produced the candidate, so consumption from it is
    // best-effort.
    let mut candidates: Vec<&str> = av_entries.iter().map(|e| e.model.as_str()).collect();
    candidates.sort_unstable();
    candidates.dedup();
    for name in candidates {
        if au.contains(name) && dr.contains(name) {
            av.consume(name);
            au.consume(name);
            dr.consume(name);
            xrefs.push(ModelXref::new(&make.av_name, name, name, name));
            events.push(MatchEvent::new(MatchStage::Common, name, name, name));
        }
    }

    // Stage 2: automatic, scoped to this make's working sets.
    for av_name in av.remaining() {
        let au_name = au.find_ignore_case(&av_name).map(str::to_string);
        let dr_name = dr.find_ignore_case(&av_name).map(str::to_string);
        if let (Some(au_name), Some(dr_name)) = (au_name, dr_name) {
            av.consume(&av_name);
            au.consume(&au_name);
            dr.consume(&dr_name);
            xrefs.push(ModelXref::new(&make.av_name, &av_name, &au_name, &dr_name));
            events.push(MatchEvent::new(
                MatchStage::Automatic,
                &av_name,
                &au_name,
                &dr_name,
            ));
        }
    }

    // Stage 3: manual rules for this make, emitted unconditionally.
    for rule in rules {
        if !eq_ignore_case(&rule.make, &make.av_name) {
            continue;
        }
        xrefs.push(ModelXref::new(
            &make.av_name,
            &rule.av_name,
            &rule.au_name,
            &rule.dr_name,
        ));
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

    // Stage 4: this make's model difference table.
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

    ModelOutcome {
        make: make.clone(),
        xrefs,
        events,
        residual,
    }
}

/// Model names of the entries whose make matches `make_name`, ignoring case
fn models_of<'a>(entries: &'a [CatalogEntry], make_name: &'a str) -> impl Iterator<Item = &'a str> {
    entries
        .iter()
        .filter(move |e| eq_ignore_case(&e.make, make_name))
        .map(|e| e.model.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toyota() -> MakeXref {
        MakeXref::new("Toyota", "TOYOTA", "Toyota")
    }

    fn no_rules() -> Vec<ModelRule> {
        Vec::new()
    }

    #[test]
    fn test_filters_by_each_sources_make_spelling() {
        let av = vec![
            CatalogEntry::new("Toyota", "Corolla"),
            CatalogEntry::new("Nissan", "Almera"),
        ];
        let au = vec![
            CatalogEntry::new("toyota", "Corolla"),
            CatalogEntry::new("NISSAN", "Almera"),
        ];
        let dr = vec![CatalogEntry::new("TOYOTA", "Corolla")];

        let outcome = reconcile_models(&toyota(), &av, &au, &dr, &no_rules());

        // Each source was filtered through its own spelling from the xref,
        // compared case-insensitively; Nissan entries never participate.
        assert_eq!(
            outcome.xrefs,
            vec![ModelXref::new("Toyota", "Corolla", "Corolla", "Corolla")]
        );
        assert_eq!(outcome.events[0].stage, MatchStage::Common);
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn test_case_insensitive_model_fallback() {
        let av = vec![CatalogEntry::new("Toyota", "Corolla")];
        let au = vec![CatalogEntry::new("TOYOTA", "COROLLA")];
        let dr = vec![CatalogEntry::new("Toyota", "Corolla")];

        let outcome = reconcile_models(&toyota(), &av, &au, &dr, &no_rules());

        assert_eq!(
            outcome.xrefs,
            vec![ModelXref::new("Toyota", "Corolla", "COROLLA", "Corolla")]
        );
        assert_eq!(outcome.events[0].stage, MatchStage::Automatic);
        // Display key carries the AV spelling.
        assert_eq!(outcome.xrefs[0].model, "Corolla");
    }

    #[test]
    fn test_unmatched_model_stays_in_own_column() {
        let av = vec![
            CatalogEntry::new("Toyota", "Corolla"),
            CatalogEntry::new("Toyota", "Camry"),
        ];
        let au = vec![CatalogEntry::new("TOYOTA", "COROLLA")];
        let dr = vec![CatalogEntry::new("Toyota", "Corolla")];

        let outcome = reconcile_models(&toyota(), &av, &au, &dr, &no_rules());

        assert_eq!(outcome.xrefs.len(), 1);
        assert_eq!(outcome.residual.av, vec!["Camry"]);
        assert!(outcome.residual.au.is_empty());
        assert!(outcome.residual.dr.is_empty());

        let unresolved: Vec<_> = outcome
            .events
            .iter()
            .filter(|e| e.stage == MatchStage::Unresolved)
            .collect();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].av_name, "Camry");
        assert_eq!(unresolved[0].au_name, "");
        assert_eq!(unresolved[0].dr_name, "");
    }

    #[test]
    fn test_common_candidates_come_from_full_av_catalog() {
        // "Corolla" is filed under Lexus in the AV catalog, so Toyota's
        // filtered AV set does not contain it; it is still a common
        // candidate because the AV catalog as a whole produced it, and the
        // filtered AU and DR sets carry it verbatim.
        let av = vec![CatalogEntry::new("Lexus", "Corolla")];
        let au = vec![CatalogEntry::new("TOYOTA", "Corolla")];
        let dr = vec![CatalogEntry::new("Toyota", "Corolla")];

        let outcome = reconcile_models(&toyota(), &av, &au, &dr, &no_rules());

        assert_eq!(
            outcome.xrefs,
            vec![ModelXref::new("Toyota", "Corolla", "Corolla", "Corolla")]
        );
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn test_manual_rule_scoped_to_make() {
        let rules = vec![
            ModelRule {
                make: "TOYOTA".into(), // case-insensitive match on the AV spelling
                av_name: "Land Cruiser".into(),
                au_name: "LAND CRUISER 200".into(),
                dr_name: "Land Cruiser".into(),
            },
            ModelRule {
                make: "Nissan".into(),
                av_name: "Patrol".into(),
                au_name: "PATROL".into(),
                dr_name: "Patrol".into(),
            },
        ];

        let outcome = reconcile_models(&toyota(), &[], &[], &[], &rules);

        assert_eq!(
            outcome.xrefs,
            vec![ModelXref::new(
                "Toyota",
                "Land Cruiser",
                "LAND CRUISER 200",
                "Land Cruiser"
            )]
        );
        assert_eq!(outcome.events[0].stage, MatchStage::ManualRule);
    }

    #[test]
    fn test_manual_rule_removes_spellings_from_residual() {
        let av = vec![CatalogEntry::new("Toyota", "Hilux")];
        let au = vec![CatalogEntry::new("TOYOTA", "HILUX pickup")];
        let dr = vec![CatalogEntry::new("Toyota", "Hi-lux")];
        let rules = vec![ModelRule {
            make: "Toyota".into(),
            av_name: "Hilux".into(),
            au_name: "HILUX pickup".into(),
            dr_name: "Hi-lux".into(),
        }];

        let outcome = reconcile_models(&toyota(), &av, &au, &dr, &rules);

        assert_eq!(outcome.xrefs.len(), 1);
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn test_fresh_working_sets_per_invocation() {
        let av = vec![CatalogEntry::new("Toyota", "Corolla")];
        let au = vec![CatalogEntry::new("TOYOTA", "Corolla")];
        let dr = vec![CatalogEntry::new("Toyota", "Corolla")];

        let first = reconcile_models(&toyota(), &av, &au, &dr, &no_rules());
        let second = reconcile_models(&toyota(), &av, &au, &dr, &no_rules());
        assert_eq!(first, second);
    }
}
