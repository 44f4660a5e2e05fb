//! Domain Services
//!
//! Stateless analysis steps. Each takes plain data and returns plain data;
//! file access stays behind the ports.

pub mod checker;
pub mod classifier;
mod glob;
pub mod resolver;
pub mod source_filter;

pub use checker::{check, CheckOptions, CheckOutcome};
pub use classifier::{Classification, Classifier};
pub use resolver::{ModuleIndex, ReferenceResolver, Resolution};
pub use source_filter::SourceFilter;
