//! File System Implementations
//!
//! Concrete implementations of the `SourceTree` port, plus atomic writes
//! for report files.

mod local;
mod memory;
mod writer;

pub use local::LocalSourceTree;
pub use memory::MemorySourceTree;
pub use writer::atomic_write;
