//! Core data types for catalog cross-referencing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CatalogEntry`]: A make/model pair as read verbatim from one source
//! - [`MakeXref`], [`ModelXref`]: Resolved cross-reference rows
//! - [`MakeRule`], [`ModelRule`], [`RuleSet`]: Operator-maintained overrides
//! - [`NamingConvention`], [`MatchStage`], [`MatchEvent`]: Classification types
//!
//! ## Naming conventions
//!
//! The three catalogs name the same physical makes and models differently:
//!
//! | Source   | Structure                  | Quirk                                |
//! |----------|----------------------------|--------------------------------------|
//! | av-style | Catalog/Make/Model         | literal names in attributes          |
//! | au-style | catalog/mark/folder        | trailing comma annotation on models  |
//! | dr-style | flat Marks + Models tables | joined on a shared numeric id        |
//!
//! Matching uses exact equality first, then case-insensitive equality; name
//! equivalence beyond casing is defined only through explicit manual rules.

pub mod entry;
pub mod rules;
pub mod types;
pub mod xref;

pub use entry::CatalogEntry;
pub use rules::{MakeRule, ModelRule, RuleSet};
pub use types::{MatchEvent, MatchStage, NamingConvention};
pub use xref::{MakeXref, ModelXref};
