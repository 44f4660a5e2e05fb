pub mod finding;
pub mod header;
