//! Persistence for the cross-reference tables.
//!
//! The store is a versioned JSON document holding the two tables a run
//! produces — make rows and model rows — with no foreign key between them
//! beyond the shared make spelling. Rows are written once per run and never
//! updated in place.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::xref::{MakeXref, ModelXref};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse store: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Store format version for compatibility checking
pub const STORE_VERSION: &str = "1.0.0";

/// The persisted cross-reference document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrefStore {
    pub version: String,
    pub created_at: String,
    pub makes: Vec<MakeXref>,
    pub models: Vec<ModelXref>,
}

impl XrefStore {
    /// Assemble a store document from one run's rows, stamped now
    pub fn new(makes: Vec<MakeXref>, models: Vec<ModelXref>) -> Self {
        Self {
            version: STORE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            makes,
            models,
        }
    }

    /// Load a store from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a store from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let store: Self = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if store.version != STORE_VERSION {
            tracing::warn!(
                "Store version mismatch (expected {}, found {})",
                STORE_VERSION,
                store.version
            );
        }

        Ok(store)
    }

    /// Export the store to JSON
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the store to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> XrefStore {
        XrefStore::new(
            vec![MakeXref::new("Toyota", "TOYOTA", "Toyota")],
            vec![ModelXref::new("Toyota", "Corolla", "COROLLA", "Corolla")],
        )
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xref.json");

        let store = sample();
        store.save(&path).unwrap();

        let loaded = XrefStore::load_from_file(&path).unwrap();
        assert_eq!(loaded.version, STORE_VERSION);
        assert_eq!(loaded.makes, store.makes);
        assert_eq!(loaded.models, store.models);
    }

    #[test]
    fn test_to_json_contains_both_tables() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"makes\""));
        assert!(json.contains("\"models\""));
        assert!(json.contains("TOYOTA"));
        assert!(json.contains("COROLLA"));
    }

    #[test]
    fn test_model_rows_keep_display_key_alias() {
        let json = sample().to_json().unwrap();
        let loaded = XrefStore::from_json(&json).unwrap();
        assert_eq!(loaded.models[0].model, loaded.models[0].av_name);
    }

    #[test]
    fn test_version_mismatch_still_loads() {
        let mut store = sample();
        store.version = "0.0.1".to_string();
        let json = serde_json::to_string(&store).unwrap();
        let loaded = XrefStore::from_json(&json).unwrap();
        assert_eq!(loaded.version, "0.0.1");
    }
}
