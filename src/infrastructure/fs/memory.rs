//! In-memory source tree, for tests and embedding

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::SourceTree;
use crate::error::LayerGuardResult;

#[derive(Debug, Clone, Default)]
pub struct MemorySourceTree {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemorySourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }
}

impl SourceTree for MemorySourceTree {
    fn files(&self) -> LayerGuardResult<Vec<PathBuf>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, relative: &Path) -> io::Result<Vec<u8>> {
        self.files.get(relative).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not in source tree", relative.display()),
            )
        })
    }
}
