//! Wayfarer CLI library.
//!
//! Subcommand handlers, logging setup and output formatting for the
//! `wayfarer-cli` binary.

pub mod commands;
pub mod logging;
pub mod output;
