//! Source Filter
//!
//! Selects which discovered files are analysed, from the `[project]`
//! include/exclude globs. Paths are relative to the project root.

use std::path::Path;

use globset::GlobSet;

use crate::config::ProjectConfig;
use crate::domain::value_objects::display_path;
use crate::error::ConfigError;

use super::glob::compile_set;

#[derive(Debug, Clone)]
pub struct SourceFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl SourceFilter {
    pub fn new(project: &ProjectConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            include: compile_set(&project.include)?,
            exclude: compile_set(&project.exclude)?,
        })
    }

    pub fn accepts(&self, relative: &Path) -> bool {
        let path = display_path(relative);
        self.include.is_match(&path) && !self.exclude.is_match(&path)
    }
}
