//! CLI subcommand handlers.

pub mod config;
pub mod docs;
pub mod play;
pub mod scripts;
