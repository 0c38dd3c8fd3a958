//! Command line front end for `ringarray-core`
//!
//! Provides the `ringarray` binary's argument parsing, file handling and
//! report rendering as a library so it can be driven from tests.

pub mod cli;
pub mod commands;
pub mod report;

pub use cli::{Cli, Command, DesignArgs, EstimateArgs, OutputFormat};
pub use commands::run;
