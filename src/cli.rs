// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskord`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskord",
    version,
    about = "Topologically order tasks from task/prerequisite line pairs.",
    long_about = None
)]
pub struct CliArgs {
    /// Read input lines from this file instead of standard input.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
