//! Chat command parsing.
//!
//! Lines look like `/trust red`, `/doubt red blue`, `/clear all` or `/stat`.

use thiserror::Error;

/// Prefix every chat command starts with.
pub const COMMAND_PREFIX: char = '/';

/// Usage of the trust command.
pub const USAGE_TRUST: &str = "/trust {source(optional)} {target}";
/// Usage of the doubt command.
pub const USAGE_DOUBT: &str = "/doubt {source(optional)} {target}";
/// Usage of the clear command.
pub const USAGE_CLEAR: &str = "/clear [all|{source (optional)} {target}]";
/// Usage of the stat command.
pub const USAGE_STAT: &str = "/stat";

/// Which graph command a line invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `/trust`
    Trust,
    /// `/doubt`
    Doubt,
    /// `/clear` and `/clear all`
    Clear,
    /// `/stat`
    Stat,
}

impl CommandKind {
    /// Usage line shown with errors.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Trust => USAGE_TRUST,
            CommandKind::Doubt => USAGE_DOUBT,
            CommandKind::Clear => USAGE_CLEAR,
            CommandKind::Stat => USAGE_STAT,
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "trust" => Some(CommandKind::Trust),
            "doubt" => Some(CommandKind::Doubt),
            "clear" => Some(CommandKind::Clear),
            "stat" => Some(CommandKind::Stat),
            _ => None,
        }
    }
}

/// One or two role identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    /// Target (one-arg form) or source (two-arg form)
    pub first: String,
    /// Target in the two-arg form
    pub second: Option<String>,
}

impl Targets {
    /// Second identifier as `&str`.
    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }
}

/// A parsed graph command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Record trust
    Trust(Targets),
    /// Record doubt
    Doubt(Targets),
    /// Remove one relation
    Clear(Targets),
    /// Wipe the graph
    ClearAll,
    /// Show rankings
    Stat,
}

impl BotCommand {
    /// Kind of command, for usage lines.
    pub fn kind(&self) -> CommandKind {
        match self {
            BotCommand::Trust(_) => CommandKind::Trust,
            BotCommand::Doubt(_) => CommandKind::Doubt,
            BotCommand::Clear(_) | BotCommand::ClearAll => CommandKind::Clear,
            BotCommand::Stat => CommandKind::Stat,
        }
    }
}

/// Caller-side usage mistakes, rejected before reaching the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Not a graph command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// No identifiers given
    #[error("too few arguments.")]
    TooFew(CommandKind),

    /// More identifiers than the command accepts
    #[error("too many arguments.")]
    TooMany(CommandKind),
}

impl UsageError {
    /// Usage line for the failed command, if it was a known one.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            UsageError::UnknownCommand(_) => None,
            UsageError::TooFew(kind) | UsageError::TooMany(kind) => Some(kind.usage()),
        }
    }
}

/// Parse a chat line into a graph command.
pub fn parse_command(line: &str) -> Result<BotCommand, UsageError> {
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let name = head.strip_prefix(COMMAND_PREFIX).unwrap_or(head);
    let args: Vec<&str> = parts.collect();

    let kind = CommandKind::parse(name)
        .ok_or_else(|| UsageError::UnknownCommand(head.to_string()))?;

    match kind {
        CommandKind::Stat => {
            if !args.is_empty() {
                return Err(UsageError::TooMany(kind));
            }
            Ok(BotCommand::Stat)
        }
        CommandKind::Clear if args.first() == Some(&"all") => {
            if args.len() > 1 {
                return Err(UsageError::TooMany(kind));
            }
            Ok(BotCommand::ClearAll)
        }
        _ => {
            let targets = match args.as_slice() {
                [] => return Err(UsageError::TooFew(kind)),
                [first] => Targets {
                    first: first.to_string(),
                    second: None,
                },
                [first, second] => Targets {
                    first: first.to_string(),
                    second: Some(second.to_string()),
                },
                _ => return Err(UsageError::TooMany(kind)),
            };
            Ok(match kind {
                CommandKind::Trust => BotCommand::Trust(targets),
                CommandKind::Doubt => BotCommand::Doubt(targets),
                _ => BotCommand::Clear(targets),
            })
        }
    }
}
