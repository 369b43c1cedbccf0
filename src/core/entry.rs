use serde::{Deserialize, Serialize};

/// A single make/model pair as read verbatim from one catalog source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Make name in that source's spelling
    pub make: String,

    /// Model name in that source's spelling
    pub model: String,
}

impl CatalogEntry {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }
}
