//! A command session: one invoking member talking to one graph.

use crate::commands::{parse_command, Dispatcher, UsageError};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use doubtgraph_domain::{Member, MemberId};
use doubtgraph_service::{RosterProvider, SessionContext};
use std::sync::Arc;

/// What the caller should do after a line was executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text
    Output(String),
    /// Print the help text
    Help,
    /// Leave the session
    Exit,
    /// Nothing to print
    Nothing,
}

/// Executes input lines on behalf of the current invoker.
pub struct Session {
    dispatcher: Dispatcher,
    roster: Arc<dyn RosterProvider>,
    ctx: SessionContext,
    invoker: Option<MemberId>,
    formatter: Formatter,
}

impl Session {
    /// Create a session.
    pub fn new(
        dispatcher: Dispatcher,
        roster: Arc<dyn RosterProvider>,
        ctx: SessionContext,
        formatter: Formatter,
    ) -> Self {
        Self {
            dispatcher,
            roster,
            ctx,
            invoker: None,
            formatter,
        }
    }

    /// Set the invoking member.
    pub fn with_invoker(mut self, invoker: impl Into<MemberId>) -> Self {
        self.invoker = Some(invoker.into());
        self
    }

    /// Current invoking member id.
    pub fn invoker(&self) -> Option<&MemberId> {
        self.invoker.as_ref()
    }

    /// The output formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Execute one input line.
    pub async fn execute_line(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Nothing);
        }

        let mut parts = line.split_whitespace();
        match parts.next().unwrap_or_default() {
            "exit" | "quit" | "/exit" | "/quit" => return Ok(Outcome::Exit),
            "help" | "?" | "/help" => return Ok(Outcome::Help),
            "/as" => {
                let id = match (parts.next(), parts.next()) {
                    (Some(id), None) => id,
                    _ => return Err(CliError::InvalidInput("Usage: /as <member-id>".to_string())),
                };
                return self.switch_invoker(id).await.map(Outcome::Output);
            }
            "/roster" => return self.roster().await.map(Outcome::Output),
            _ => {}
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(UsageError::UnknownCommand(name)) => {
                tracing::debug!(%name, "Unknown command");
                return Ok(Outcome::Help);
            }
            Err(e) => return Ok(Outcome::Output(self.formatter.format_usage_error(&e))),
        };

        let reply = self
            .dispatcher
            .dispatch(&self.ctx, self.invoker.as_ref(), command)
            .await?;

        self.formatter.format_reply(&reply).map(Outcome::Output)
    }

    /// Render the current roster.
    pub async fn roster(&self) -> Result<String> {
        let members = self.fetch_members().await?;
        let marker = &self.dispatcher.service().resolver().config().attendee_marker;
        self.formatter.format_roster(&members, marker)
    }

    async fn switch_invoker(&mut self, id: &str) -> Result<String> {
        let members = self.fetch_members().await?;
        let member = members
            .iter()
            .find(|m| m.id.as_str() == id)
            .ok_or_else(|| CliError::InvalidInput(format!("No member with id {} in roster", id)))?;

        tracing::debug!(member = %member.id, "Switched invoker");
        let message = format!("Acting as {} ({})", member.name, member.id);
        self.invoker = Some(member.id.clone());
        Ok(self.formatter.success(&message))
    }

    async fn fetch_members(&self) -> Result<Vec<Member>> {
        self.roster
            .fetch_roster(&self.ctx)
            .await
            .map_err(|e| CliError::Roster(e.to_string()))
    }
}
