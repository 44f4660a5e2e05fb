//! Domain Policies
//!
//! Business rules expressed as data.

mod policy_table;

pub use policy_table::{default_rules, Decision, PolicyRule, PolicyTable};
