//! Team and player catalog loading.

/// Bootstrap document fetch and projection.
pub mod loader;

pub use loader::{BootstrapDocument, CatalogLoader};
