//! Command handlers for the CLI binary

pub mod config;
pub mod create;
pub mod info;
pub mod play;
pub mod prompt;
