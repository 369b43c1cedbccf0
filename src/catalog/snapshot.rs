use std::path::Path;

use tracing::warn;

use crate::core::entry::CatalogEntry;
use crate::core::types::NamingConvention;
use crate::parsing::{self, ParseError};

/// The three catalogs' entries for one reconciliation run.
///
/// Created fresh per run, held only in memory, never mutated after
/// assembly.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub av: Vec<CatalogEntry>,
    pub au: Vec<CatalogEntry>,
    pub dr: Vec<CatalogEntry>,
}

impl CatalogSnapshot {
    /// Parse the three catalog files into a snapshot.
    ///
    /// A catalog that cannot be read or parsed degrades to an empty list
    /// with a warning; reconciling against an empty set yields zero
    /// mappings and reports the other catalogs' entries as unresolved.
    pub fn load(av_path: &Path, au_path: &Path, dr_path: &Path) -> Self {
        Self {
            av: load_or_empty(NamingConvention::Av, parsing::av::parse_file(av_path)),
            au: load_or_empty(NamingConvention::Au, parsing::au::parse_file(au_path)),
            dr: load_or_empty(NamingConvention::Dr, parsing::dr::parse_file(dr_path)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.av.is_empty() && self.au.is_empty() && self.dr.is_empty()
    }
}

fn load_or_empty(
    source: NamingConvention,
    result: Result<Vec<CatalogEntry>, ParseError>,
) -> Vec<CatalogEntry> {
    match result {
        Ok(entries) => entries,
        Err(err) => {
            warn!("{source} catalog degraded to empty: {err}");
            Vec::new()
        }
    }
}
