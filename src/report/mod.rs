//! Fixed-width console report rendering.
//!
//! Consumes the ordered [`MatchEvent`] sequences produced by the
//! reconcilers and renders the pipe-delimited report: a make section, an
//! unresolved-makes section, and one model-difference section per resolved
//! make. Rendering is pure string production so the report can be asserted
//! against verbatim; callers decide where the text goes.

use std::fmt::Write;

use crate::core::types::{MatchEvent, MatchStage};
use crate::reconcile::{ModelOutcome, RunOutcome};

/// Column width of every report cell
const WIDTH: usize = 26;

/// Render the full report for one reconciliation run
pub fn render_report(outcome: &RunOutcome) -> String {
    let mut out = String::new();

    render_makes(&mut out, &outcome.makes.events);

    out.push('\n');
    out.push_str(">>>>> Model difference\n");
    for model_outcome in &outcome.models {
        render_models(&mut out, model_outcome);
    }

    out
}

fn render_makes(out: &mut String, events: &[MatchEvent]) {
    out.push_str(">>>>> Supported MAKES\n");
    let _ = writeln!(
        out,
        "| {:>WIDTH$} | {:>WIDTH$} | {:>WIDTH$} |",
        "[AV-STYLE]", "[AU-STYLE]", "[DR-STYLE]"
    );
    for event in events.iter().filter(|e| e.stage != MatchStage::Unresolved) {
        out.push_str(&make_row(event));
        out.push('\n');
    }

    out.push_str(">>>>> Unsupported MAKES\n");
    for event in events.iter().filter(|e| e.stage == MatchStage::Unresolved) {
        out.push_str(&make_row(event));
        out.push('\n');
    }
}

fn render_models(out: &mut String, outcome: &ModelOutcome) {
    out.push('\n');
    let _ = writeln!(out, "-- [{}] --", outcome.make.av_name.to_uppercase());
    let _ = writeln!(
        out,
        "| {:>WIDTH$} | {:>WIDTH$} | {:>WIDTH$} | {:>WIDTH$} |",
        "[MODEL GROUP]", "[AV-STYLE]", "[AU-STYLE]", "[DR-STYLE]"
    );

    out.push_str(">> common\n");
    for event in outcome
        .events
        .iter()
        .filter(|e| e.stage != MatchStage::Unresolved)
    {
        out.push_str(&model_row(event));
        out.push('\n');
    }

    out.push_str(">> difference\n");
    for event in outcome
        .events
        .iter()
        .filter(|e| e.stage == MatchStage::Unresolved)
    {
        out.push_str(&model_row(event));
        out.push('\n');
    }
}

fn make_row(event: &MatchEvent) -> String {
    format!(
        "| {:>WIDTH$} | {:>WIDTH$} | {:>WIDTH$} |{}",
        event.av_name,
        event.au_name,
        event.dr_name,
        stage_tag(event.stage)
    )
}

fn model_row(event: &MatchEvent) -> String {
    // The model-group column carries the display key (the AV spelling);
    // unresolved rows leave it blank.
    let group = match event.stage {
        MatchStage::Unresolved => "",
        _ => event.av_name.as_str(),
    };
    format!(
        "| {:>WIDTH$} | {:>WIDTH$} | {:>WIDTH$} | {:>WIDTH$} |{}",
        group,
        event.av_name,
        event.au_name,
        event.dr_name,
        stage_tag(event.stage)
    )
}

/// Tag appended to rows that were not plain exact matches
fn stage_tag(stage: MatchStage) -> &'static str {
    match stage {
        MatchStage::Common | MatchStage::Unresolved => "",
        MatchStage::Automatic => " [rule auto]",
        MatchStage::ManualRule => " [rule manual]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::snapshot::CatalogSnapshot;
    use crate::core::entry::CatalogEntry;
    use crate::core::rules::RuleSet;
    use crate::reconcile::reconcile_snapshot;

    fn outcome() -> RunOutcome {
        let snapshot = CatalogSnapshot {
            av: vec![
                CatalogEntry::new("Toyota", "Corolla"),
                CatalogEntry::new("Toyota", "Camry"),
            ],
            au: vec![CatalogEntry::new("TOYOTA", "COROLLA")],
            dr: vec![CatalogEntry::new("Toyota", "Corolla")],
        };
        reconcile_snapshot(&snapshot, &RuleSet::default())
    }

    #[test]
    fn test_report_layout() {
        let report = render_report(&outcome());
        let expected = "\
>>>>> Supported MAKES
|                 [AV-STYLE] |                 [AU-STYLE] |                 [DR-STYLE] |
|                     Toyota |                     TOYOTA |                     Toyota | [rule auto]
>>>>> Unsupported MAKES

>>>>> Model difference

-- [TOYOTA] --
|              [MODEL GROUP] |                 [AV-STYLE] |                 [AU-STYLE] |                 [DR-STYLE] |
>> common
|                    Corolla |                    Corolla |                    COROLLA |                    Corolla | [rule auto]
>> difference
|                            |                      Camry |                            |                            |
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_unresolved_make_rows_are_positional() {
        let snapshot = CatalogSnapshot {
            av: vec![CatalogEntry::new("Moskvitch", "412")],
            au: vec![CatalogEntry::new("UAZ", "Patriot")],
            dr: vec![],
        };
        let report = render_report(&reconcile_snapshot(&snapshot, &RuleSet::default()));

        assert!(report.contains(
            "|                  Moskvitch |                        UAZ |                            |"
        ));
    }

    #[test]
    fn test_manual_rule_row_tag() {
        let snapshot = CatalogSnapshot::default();
        let rules = RuleSet {
            makes: vec![crate::core::rules::MakeRule {
                av_name: "VAZ (Lada)".into(),
                au_name: "LADA".into(),
                dr_name: "Lada".into(),
            }],
            models: Vec::new(),
        };
        let report = render_report(&reconcile_snapshot(&snapshot, &rules));

        assert!(report.contains(
            "|                 VAZ (Lada) |                       LADA |                       Lada | [rule manual]"
        ));
    }
}
