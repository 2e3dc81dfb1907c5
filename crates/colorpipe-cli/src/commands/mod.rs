//! CLI subcommand implementations.

pub mod formats;
pub mod info;
