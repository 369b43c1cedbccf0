//! Catalog snapshot assembly.
//!
//! A [`CatalogSnapshot`](snapshot::CatalogSnapshot) holds the three parsed
//! entry lists for one reconciliation run. Loading degrades a catalog that
//! fails to parse to an empty list instead of aborting the run; the
//! reconcilers then report everything from the other two catalogs as
//! unresolved, which is the documented behavior for a degraded source.

pub mod snapshot;

pub use snapshot::CatalogSnapshot;
