//! scenefix CLI entrypoint.
//!
//! Parses args, dispatches to one tool, and exits 0 on success or 1 on any
//! error (and when a keyframe rewrite made no change).
//! For programmatic use, prefer the library API (`scenefix::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
