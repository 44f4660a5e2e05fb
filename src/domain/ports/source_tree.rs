//! SourceTree port - abstraction over the analysed project's files
//!
//! The analysed tree is read-only input: implementations list and read
//! files, never write them.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::LayerGuardResult;

/// Read-only view of a project's source files
///
/// Implementations:
/// - `LocalSourceTree` - files on disk, gitignore aware
/// - `MemorySourceTree` - in-memory, for tests and embedding
pub trait SourceTree: Sync {
    /// Source files relative to the project root, sorted
    fn files(&self) -> LayerGuardResult<Vec<PathBuf>>;

    /// Raw bytes of a file, by relative path
    fn read(&self, relative: &Path) -> io::Result<Vec<u8>>;
}
