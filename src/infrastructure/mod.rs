//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Source trees (local disk, in-memory) and atomic writes
//! - `python/` - Python reference extraction on tree-sitter

pub mod fs;
pub mod python;

// Re-export for convenience
pub use fs::{atomic_write, LocalSourceTree, MemorySourceTree};
pub use python::PythonExtractor;
