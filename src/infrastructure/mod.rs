//! Infrastructure layer: I/O boundary implementations
//!
//! Implementations return plain `io::Result`; path context is attached at
//! the application layer via `IoResultExt`.

pub mod traits;

pub use traits::{FileSystem, RealFileSystem};
