//! Layer value object - the role a module plays in a domain
//!
//! Layers govern what a module may reference:
//! `api` → `service` → `selector` → `model`, with `core` as the shared base.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Architectural layer of a source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Request handlers (`api.py`)
    Api,
    /// Write-side business logic (`services.py`)
    Service,
    /// Read-only queries (`selectors.py`)
    Selector,
    /// Shared infrastructure (`apps/core`)
    Core,
    /// ORM models (`model.py`, `models.py`)
    Model,
    /// Anything the convention does not classify; never policy-checked
    Other,
}

impl Layer {
    /// Every layer that takes part in policy checks, in matrix order.
    pub const CHECKED: [Layer; 5] = [
        Layer::Api,
        Layer::Service,
        Layer::Selector,
        Layer::Model,
        Layer::Core,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Api => "api",
            Layer::Service => "service",
            Layer::Selector => "selector",
            Layer::Core => "core",
            Layer::Model => "model",
            Layer::Other => "other",
        }
    }

    /// Returns true if edges touching this layer are checked against the policy
    pub fn is_checked(&self) -> bool {
        !matches!(self, Layer::Other)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "api" => Ok(Layer::Api),
            "service" => Ok(Layer::Service),
            "selector" => Ok(Layer::Selector),
            "core" => Ok(Layer::Core),
            "model" => Ok(Layer::Model),
            "other" => Ok(Layer::Other),
            other => Err(format!(
                "unknown layer '{}' (expected api, service, selector, core, model or other)",
                other
            )),
        }
    }
}
