//! doubtgraph CLI library.
//!
//! Chat-style command parsing and dispatch, reply formatting, configuration,
//! the file-backed roster and the interactive REPL.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod roster;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use roster::FileRoster;
pub use session::{Outcome, Session};
