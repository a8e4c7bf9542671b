//! Application layer: the catalog loader over the I/O boundary
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod loader;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::{CatalogService, LoadReport, LoadedCatalog};
