//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod layer;
mod location;
mod scope;
mod severity;
mod unit_id;

pub use layer::Layer;
pub use location::{display_path, SourceLocation};
pub use scope::Scope;
pub use severity::Severity;
pub use unit_id::UnitId;
