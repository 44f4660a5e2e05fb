//! Python source support (tree-sitter)

mod extractor;

pub use extractor::PythonExtractor;
