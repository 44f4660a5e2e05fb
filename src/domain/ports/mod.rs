//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod reference_extractor;
pub mod source_tree;

pub use reference_extractor::{Extraction, RawReference, ReferenceExtractor};
pub use source_tree::SourceTree;
