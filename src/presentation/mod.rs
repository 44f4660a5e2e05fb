//! Presentation Layer
//!
//! Wires use cases to their infrastructure for the CLI.
//!
//! ## Usage
//!
//! ```ignore
//! use layerguard::presentation::factory;
//!
//! let use_case = factory::create_check_use_case(Path::new("."), config)?;
//! let report = use_case.execute()?;
//! ```

pub mod factory;

pub use factory::{create_check_use_case, ConcreteCheckUseCase};
