//! Domain Entities
//!
//! - `Unit` - A classified source module
//! - `Edge` - A reference from one unit to another
//! - `Violation` - An edge the policy does not admit
//! - `Report` - Violations and diagnostics of one run

mod edge;
mod report;
mod unit;
mod violation;

pub use edge::{Edge, EdgeTarget};
pub use report::{Outcome, Report, UnclassifiedUnit};
pub use unit::Unit;
pub use violation::{Endpoint, Violation, ViolationKind};
