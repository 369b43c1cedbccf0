use serde::{Deserialize, Serialize};

/// The three spellings of one canonical make.
///
/// Invariant: across all `MakeXref` rows produced by one run, each source's
/// spelling appears in at most one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeXref {
    pub av_name: String,
    pub au_name: String,
    pub dr_name: String,
}

impl MakeXref {
    pub fn new(
        av_name: impl Into<String>,
        au_name: impl Into<String>,
        dr_name: impl Into<String>,
    ) -> Self {
        Self {
            av_name: av_name.into(),
            au_name: au_name.into(),
            dr_name: dr_name.into(),
        }
    }
}

/// The three spellings of one canonical model, scoped to one canonical make.
///
/// `make` is the AV spelling of the owning make. `model` and `av_name` carry
/// the same value: the AV spelling doubles as the row's display key, and
/// downstream consumers address it by either name. Keep both fields in sync
/// unless those consumers are updated too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelXref {
    pub make: String,
    pub model: String,
    pub av_name: String,
    pub au_name: String,
    pub dr_name: String,
}

impl ModelXref {
    /// Build a row for `make` from the three source spellings; `model` is
    /// populated from the AV spelling.
    pub fn new(
        make: impl Into<String>,
        av_name: impl Into<String>,
        au_name: impl Into<String>,
        dr_name: impl Into<String>,
    ) -> Self {
        let av_name = av_name.into();
        Self {
            make: make.into(),
            model: av_name.clone(),
            av_name,
            au_name: au_name.into(),
            dr_name: dr_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_xref_display_key_aliases_av_name() {
        let xref = ModelXref::new("Toyota", "Corolla", "COROLLA", "Corolla");
        assert_eq!(xref.model, "Corolla");
        assert_eq!(xref.model, xref.av_name);
        assert_eq!(xref.au_name, "COROLLA");
    }
}
