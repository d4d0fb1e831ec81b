// scrub/src/commands/mod.rs
//! Command implementations for the scrub CLI.

pub mod sanitize;
pub mod scan;
