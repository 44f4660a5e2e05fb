//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::CheckUseCase;
use crate::config::Config;
use crate::error::LayerGuardResult;
use crate::infrastructure::{LocalSourceTree, PythonExtractor};

/// Type alias for the check use case over a project on disk
pub type ConcreteCheckUseCase = CheckUseCase<LocalSourceTree, PythonExtractor>;

/// Create a check use case for the project at `root`.
///
/// Fails when `root` is not a directory.
pub fn create_check_use_case(root: &Path, config: Config) -> LayerGuardResult<ConcreteCheckUseCase> {
    let tree = LocalSourceTree::open(root)?;
    Ok(CheckUseCase::new(tree, PythonExtractor::new(), config))
}
