use serde::{Deserialize, Serialize};

/// One of the three catalog naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// av-style: hierarchical Catalog/Make/Model document
    Av,
    /// au-style: hierarchical catalog/mark/folder document with annotated model names
    Au,
    /// dr-style: flat Marks/Models tables joined on a shared id
    Dr,
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Av => write!(f, "av-style"),
            Self::Au => write!(f, "au-style"),
            Self::Dr => write!(f, "dr-style"),
        }
    }
}

/// How a cross-reference row was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    /// Spelled identically in all three catalogs
    Common,
    /// Discovered via case-insensitive equality after exact matching failed
    Automatic,
    /// Supplied by an operator-maintained rule
    ManualRule,
    /// No correspondence found during this run
    Unresolved,
}

/// One row of the match report, in resolution order.
///
/// An empty string means no correspondence was found in that source at this
/// position; for `Unresolved` rows the three columns are aligned only by
/// sorted position and may pair unrelated names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub stage: MatchStage,
    pub av_name: String,
    pub au_name: String,
    pub dr_name: String,
}

impl MatchEvent {
    pub fn new(
        stage: MatchStage,
        av_name: impl Into<String>,
        au_name: impl Into<String>,
        dr_name: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            av_name: av_name.into(),
            au_name: au_name.into(),
            dr_name: dr_name.into(),
        }
    }
}
