//! Domain layer: the ordered course store and its entities
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading) and raises no errors: duplicate inserts are dropped,
//! lookup misses are `None`, and every operation is well-defined on an
//! empty store.

pub mod catalog;
pub mod entities;

pub use catalog::{CourseCatalog, InOrderIter};
pub use entities::{normalize_key, Course};
