//! Movie catalog - an in-memory, read-only view of the site database
//! snapshot.
//!
//! The snapshot is a flat JSON array produced by the site crawler. It
//! is loaded lazily, exactly once per process, and lookups never fail:
//! a broken snapshot just means an empty catalog.

mod json;
mod types;

pub use json::JsonCatalog;
pub use types::*;
