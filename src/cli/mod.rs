//! Command Line Interface (CLI) layer for scenefix.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the four subcommands. It
//! merges config-file values with flags and hands typed parameters to
//! `scenefix::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
