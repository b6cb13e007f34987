//! tursa-common: Shared types and static content used across all TURSA crates.
//!
//! The project catalog and the about-page copy are compile-time data; the
//! web crate renders them and the UI crate drives which of them is shown.

pub mod error;
pub mod catalog;
pub mod content;

// Re-export commonly used types
pub use catalog::{Catalog, ProjectRecord};
pub use error::{CatalogError, Result};
