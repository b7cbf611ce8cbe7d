//! In-memory product catalog.
//!
//! A catalog is an ordered collection of [`Product`] records that owns every
//! record it holds. Records are identified by position. The crate provides
//! bulk construction from parallel columns, teardown, a fixed-layout textual
//! listing, two linear-scan extremum queries and a stable in-place sort by
//! inventory. Everything is single-threaded and synchronous.

pub mod catalog;
pub mod product;
pub mod query;
pub mod report;
pub mod sort;

pub use catalog::Catalog;
pub use product::Product;
pub use report::{ListingFormat, ListingLine};
pub use sort::SortOutcome;

pub use stockroom_core::{CatalogError, CatalogResult, OrderedStore, Position};
