//! Domain Layer
//!
//! Pure analysis logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Units, edges, violations and the report
//! - `value_objects/` - Immutable value types (Layer, Scope, UnitId)
//! - `services/` - Classifier, resolver and checker
//! - `policies/` - The policy table
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
