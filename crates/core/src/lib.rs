//! `stockroom-core` — building blocks shared by the catalog crates.
//!
//! This crate contains the ordered-container seam, positional handles and the
//! error model. It performs no IO.

pub mod error;
pub mod position;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use position::Position;
pub use store::OrderedStore;
