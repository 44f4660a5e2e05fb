//! layerguard - layer-boundary checker for Python projects
//!
//! Projects organised as API → Service → Selector → Model, split into
//! domains, declare which layer may call which. layerguard classifies every
//! module into a (domain, layer) pair, extracts the references between
//! modules, and reports each reference the policy table does not allow.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Analysis, CheckUseCase};
pub use config::Config;
pub use domain::entities::{Edge, Outcome, Report, Unit, Violation, ViolationKind};
pub use domain::policies::{PolicyRule, PolicyTable};
pub use domain::value_objects::{Layer, Scope, Severity};
pub use error::{ConfigError, LayerGuardError, LayerGuardResult, ParseError};
