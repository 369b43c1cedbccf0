use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read rule file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse rule file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Operator-authored make correspondence.
///
/// Takes precedence over automatic discovery for the make it names: the row
/// is emitted unconditionally, even when the target could not (or already
/// did) resolve automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeRule {
    pub av_name: String,
    pub au_name: String,
    pub dr_name: String,
}

/// Operator-authored model correspondence, scoped to one make.
///
/// `make` is compared case-insensitively against the AV spelling of the make
/// being reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRule {
    pub make: String,
    pub av_name: String,
    pub au_name: String,
    pub dr_name: String,
}

/// The two operator-maintained override lists.
///
/// Ships empty; intended as a hand-curation point for correspondences the
/// automatic stages cannot discover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub makes: Vec<MakeRule>,

    #[serde(default)]
    pub models: Vec<ModelRule>,
}

impl RuleSet {
    /// Load a rule set from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, RulesError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_set_defaults_empty() {
        let rules: RuleSet = serde_json::from_str("{}").unwrap();
        assert!(rules.makes.is_empty());
        assert!(rules.models.is_empty());
    }

    #[test]
    fn test_rule_set_from_json() {
        let json = r#"{
            "makes": [
                {"av_name": "VAZ (Lada)", "au_name": "LADA", "dr_name": "Lada"}
            ],
            "models": [
                {"make": "VAZ (Lada)", "av_name": "2107", "au_name": "2107 classic", "dr_name": "VAZ-2107"}
            ]
        }"#;

        let rules: RuleSet = serde_json::from_str(json).unwrap();
        assert_eq!(rules.makes.len(), 1);
        assert_eq!(rules.makes[0].au_name, "LADA");
        assert_eq!(rules.models.len(), 1);
        assert_eq!(rules.models[0].make, "VAZ (Lada)");
    }
}
