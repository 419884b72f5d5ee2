//! Output formatting for the CLI.

use crate::commands::{Reply, UsageError};
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use doubtgraph_domain::Member;
use doubtgraph_stats::RankEntry;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Reply after `/clear all`.
pub const CLEARED_MESSAGE: &str = "clear: graph has been cleared";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the reply to a graph command.
    pub fn format_reply(&self, reply: &Reply) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_reply_json(reply),
            OutputFormat::Table => Ok(self.format_reply_table(reply)),
        }
    }

    fn format_reply_json(&self, reply: &Reply) -> Result<String> {
        let value = match reply {
            Reply::Graph { path, snapshot } => serde_json::json!({
                "status": "ok",
                "artifact": path.display().to_string(),
                "nodes": snapshot.players.len(),
                "edges": snapshot.relations.len(),
            }),
            Reply::Cleared => serde_json::json!({
                "status": "ok",
                "message": CLEARED_MESSAGE,
            }),
            Reply::Stats(rankings) => serde_json::to_value(rankings)?,
            Reply::Failure { usage, message } => serde_json::json!({
                "status": "error",
                "message": message,
                "usage": usage,
            }),
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_reply_table(&self, reply: &Reply) -> String {
        match reply {
            Reply::Graph { path, snapshot } => self.success(&format!(
                "Graph written to {} ({} players, {} relations)",
                path.display(),
                snapshot.players.len(),
                snapshot.relations.len()
            )),
            Reply::Cleared => self.success(CLEARED_MESSAGE),
            Reply::Stats(rankings) => {
                let doubt = self.ranking_table("Doubt ranking", &rankings.doubt_ranked);
                let trust = self.ranking_table("Trust ranking", &rankings.trust_ranked);
                format!("{}\n\n{}", doubt, trust)
            }
            Reply::Failure { usage, message } => self.failure(usage, message),
        }
    }

    fn ranking_table(&self, title: &str, entries: &[RankEntry]) -> String {
        let heading = self.colorize(title, "cyan");
        if entries.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No entries.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Rank", "Name", "Role", "Count"]);
        for entry in entries {
            builder.push_record([
                entry.rank.to_string(),
                entry.name.clone(),
                entry.color_tag.clone(),
                entry.count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", heading, table)
    }

    /// Format a usage error caught before dispatch.
    pub fn format_usage_error(&self, error: &UsageError) -> String {
        match error.usage() {
            Some(usage) => self.failure(usage, &error.to_string()),
            None => self.error(&format!("{}. Type '/help' for available commands.", error)),
        }
    }

    /// Format the roster listing.
    pub fn format_roster(&self, members: &[Member], attendee_marker: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = members
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "id": m.id.as_str(),
                            "name": m.name,
                            "markers": m.markers,
                            "attendee": m.has_marker(attendee_marker),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if members.is_empty() {
                    return Ok(self.colorize("Roster is empty.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Markers", "Attendee"]);
                for member in members {
                    let attendee = if member.has_marker(attendee_marker) { "yes" } else { "no" };
                    builder.push_record([
                        member.id.to_string(),
                        member.name.clone(),
                        member.markers.join(", "),
                        attendee.to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    fn failure(&self, usage: &str, message: &str) -> String {
        format!(
            "{}\n{}",
            self.error(&format!("Error: {}", message)),
            self.colorize(&format!("usage: {}", usage), "yellow")
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
