//! # car-xref
//!
//! A library for reconciling vehicle make/model names across three
//! independently curated reference catalogs.
//!
//! The same physical make or model is spelled differently from catalog to
//! catalog — casing, abbreviation, structure — which makes records from
//! different sources hard to correlate. `car-xref` resolves the three
//! spellings of each make and model into one canonical cross-reference row,
//! using a deterministic staged matching process with operator-maintained
//! overrides.
//!
//! ## Features
//!
//! - **Exact matching**: names spelled identically resolve first
//! - **Case-insensitive fallback**: remaining names match ignoring case,
//!   keeping each source's original spelling
//! - **Manual rules**: operator-supplied correspondences that always surface
//! - **Residual reporting**: unmatched names reported per source
//! - **Schema-specific parsers**: one per catalog XML dialect
//! - **Concurrent fetching**: bounded, per-download timeouts and progress
//!
//! ## Example
//!
//! ```rust
//! use car_xref::{reconcile_snapshot, CatalogEntry, CatalogSnapshot, RuleSet};
//!
//! let snapshot = CatalogSnapshot {
//!     av: vec![CatalogEntry::new("Toyota", "Corolla")],
//!     au: vec![CatalogEntry::new("TOYOTA", "COROLLA")],
//!     dr: vec![CatalogEntry::new("Toyota", "Corolla")],
//! };
//!
//! let outcome = reconcile_snapshot(&snapshot, &RuleSet::default());
//! assert_eq!(outcome.makes.xrefs[0].au_name, "TOYOTA");
//! assert_eq!(outcome.models[0].xrefs[0].model, "Corolla");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Entry, cross-reference, rule, and event types
//! - [`catalog`]: Snapshot assembly with degrade-to-empty loading
//! - [`parsing`]: Parsers for the three catalog XML schemas
//! - [`reconcile`]: The staged three-way matching process
//! - [`report`]: Fixed-width report rendering
//! - [`store`]: Persisted cross-reference tables
//! - [`fetch`]: Concurrent catalog download
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod fetch;
pub mod parsing;
pub mod reconcile;
pub mod report;
pub mod store;

// Re-export commonly used types for convenience
pub use catalog::snapshot::CatalogSnapshot;
pub use core::entry::CatalogEntry;
pub use core::rules::{MakeRule, ModelRule, RuleSet};
pub use core::types::{MatchEvent, MatchStage, NamingConvention};
pub use core::xref::{MakeXref, ModelXref};
pub use reconcile::{reconcile_makes, reconcile_models, reconcile_snapshot, RunOutcome};
pub use report::render_report;
pub use store::XrefStore;
