//! Command parsing and dispatch.

pub mod dispatch;
pub mod parse;

pub use self::dispatch::{store_message, Dispatcher, Reply};
pub use self::parse::{parse_command, BotCommand, CommandKind, Targets, UsageError};
