//! account-merge library
//!
//! Resolves the two accounts named on the command line and hands them to
//! the merge orchestrator.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod resolve;

pub use cli::{Cli, Command, MergeArgs};
pub use commands::run;
pub use error::{CliError, CliErrorResult};
pub use resolve::build_request;
