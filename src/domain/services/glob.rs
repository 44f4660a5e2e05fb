//! Glob compilation shared by the classifier and the source filter

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::ConfigError;

/// Compile one pattern; `*` never crosses a `/`.
pub(crate) fn compile(pattern: &str) -> Result<Glob, ConfigError> {
    GlobBuilder::new(pattern.trim_end_matches('/'))
        .literal_separator(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })
}

pub(crate) fn compile_set<'a>(
    patterns: impl IntoIterator<Item = &'a String>,
) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    let mut joined = Vec::new();
    for pattern in patterns {
        builder.add(compile(pattern)?);
        joined.push(pattern.as_str());
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        pattern: joined.join(", "),
        message: e.kind().to_string(),
    })
}
