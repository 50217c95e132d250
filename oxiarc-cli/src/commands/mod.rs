//! Command implementations for the OxiArc BWT CLI.

pub mod info;
pub mod suffixes;
pub mod transform;

pub use info::cmd_info;
pub use suffixes::cmd_suffixes;
pub use test::cmd_test;
pub use transform::cmd_transform;
