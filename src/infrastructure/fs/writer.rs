//! Atomic file writes

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::LayerGuardResult;

/// Write `content` to `path` through a temporary file in the same
/// directory, so readers never observe a partial file.
pub fn atomic_write(path: &Path, content: &[u8]) -> LayerGuardResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
