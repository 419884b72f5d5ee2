//! CLI argument parsing.

use clap::{Parser, Subcommand};

/// doubtgraph - record trust and doubt between players and draw the graph.
#[derive(Debug, Parser)]
#[command(name = "doubtgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Roster file, overrides the configured one
    #[arg(short, long, global = true, env = "DOUBTGRAPH_ROSTER")]
    pub roster: Option<String>,

    /// Member id to act as
    #[arg(long = "as", global = true)]
    pub invoker: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter interactive REPL mode
    Repl,

    /// List roster members
    Roster,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["doubtgraph"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "doubtgraph",
            "roster",
            "--roster",
            "night.toml",
            "--as",
            "42",
            "--format",
            "json",
        ]);
        assert!(matches!(cli.command, Some(Command::Roster)));
        assert_eq!(cli.roster.as_deref(), Some("night.toml"));
        assert_eq!(cli.invoker.as_deref(), Some("42"));

        let format: OutputFormat = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
        assert_eq!(format, OutputFormat::Json);
    }
}
