//! Local File System Implementation
//!
//! Implements the `SourceTree` port for a project on local disk.

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::SourceTree;
use crate::error::{LayerGuardError, LayerGuardResult};

/// Project directory on disk
///
/// Walks the tree honouring `.gitignore` and `.ignore` files and skipping
/// hidden entries. Paths are returned relative to the root.
#[derive(Debug, Clone)]
pub struct LocalSourceTree {
    root: PathBuf,
}

impl LocalSourceTree {
    /// Open a project root, failing if it is not a directory
    pub fn open(root: impl Into<PathBuf>) -> LayerGuardResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(LayerGuardError::ProjectNotFound { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceTree for LocalSourceTree {
    fn files(&self) -> LayerGuardResult<Vec<PathBuf>> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| LayerGuardError::Walk {
                root: self.root.clone(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                files.push(relative.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    fn read(&self, relative: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(relative))
    }
}
