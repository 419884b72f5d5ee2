//! Command dispatch: runs parsed commands against the graph service.

use crate::commands::parse::{BotCommand, CommandKind};
use crate::error::{CliError, Result};
use doubtgraph_domain::{GraphSnapshot, MemberId, RelationKind};
use doubtgraph_render::GraphRenderer;
use doubtgraph_resolver::ResolveError;
use doubtgraph_service::{GraphService, ServiceError, SessionContext};
use doubtgraph_stats::Rankings;
use doubtgraph_store::StoreError;
use std::path::PathBuf;
use std::sync::Arc;

/// Shown when a store endpoint is unknown.
pub const ERROR_NOT_ATTENDEE: &str = "specified member is not attendee.";

/// What the bot answers to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The graph changed and was re-rendered
    Graph {
        /// Rendered artifact
        path: PathBuf,
        /// Graph that was rendered
        snapshot: GraphSnapshot,
    },
    /// The graph was wiped
    Cleared,
    /// Rankings for `/stat`
    Stats(Rankings),
    /// The command was rejected
    Failure {
        /// Usage line of the failed command
        usage: &'static str,
        /// Message for the user
        message: String,
    },
}

/// User-facing text for a store error.
pub fn store_message(error: &StoreError) -> String {
    match error {
        StoreError::NoSuchRelation => "no such relation.".to_string(),
        StoreError::InvalidRelation => "invalid relation.".to_string(),
        StoreError::UnknownPlayer(_) => ERROR_NOT_ATTENDEE.to_string(),
    }
}

/// Runs commands on behalf of invoking members.
pub struct Dispatcher {
    service: Arc<GraphService>,
    renderer: Arc<dyn GraphRenderer>,
    rank_limit: usize,
}

impl Dispatcher {
    /// Create a dispatcher.
    pub fn new(
        service: Arc<GraphService>,
        renderer: Arc<dyn GraphRenderer>,
        rank_limit: usize,
    ) -> Self {
        Self {
            service,
            renderer,
            rank_limit,
        }
    }

    /// The underlying service.
    pub fn service(&self) -> &Arc<GraphService> {
        &self.service
    }

    /// Execute a command.
    ///
    /// Resolver and store errors become [`Reply::Failure`]; roster and
    /// rendering failures are returned as errors. Only the one-argument
    /// forms of `/trust`, `/doubt` and `/clear` need an invoker.
    pub async fn dispatch(
        &self,
        ctx: &SessionContext,
        invoker: Option<&MemberId>,
        command: BotCommand,
    ) -> Result<Reply> {
        let kind = command.kind();

        let outcome = match &command {
            BotCommand::ClearAll => {
                self.service.clear_all().await;
                tracing::info!(guild = %ctx.guild, "Graph cleared");
                return Ok(Reply::Cleared);
            }
            BotCommand::Stat => {
                let rankings = self.service.rankings(self.rank_limit).await;
                return Ok(Reply::Stats(rankings));
            }
            BotCommand::Trust(t) => {
                self.service
                    .apply_relation(ctx, invoker, &t.first, t.second(), RelationKind::Trust)
                    .await
            }
            BotCommand::Doubt(t) => {
                self.service
                    .apply_relation(ctx, invoker, &t.first, t.second(), RelationKind::Doubt)
                    .await
            }
            BotCommand::Clear(t) => {
                self.service
                    .clear_relation(ctx, invoker, &t.first, t.second())
                    .await
            }
        };

        match outcome {
            Ok(snapshot) => {
                let path = self.renderer.render(&snapshot).await?;
                tracing::info!(
                    guild = %ctx.guild,
                    command = ?kind,
                    relations = snapshot.relations.len(),
                    "Graph updated"
                );
                Ok(Reply::Graph { path, snapshot })
            }
            Err(error) => self.failure(kind, error),
        }
    }

    fn failure(&self, kind: CommandKind, error: ServiceError) -> Result<Reply> {
        let message = match error {
            ServiceError::Resolve(ResolveError::MissingInvoker) => {
                return Err(CliError::NoInvoker)
            }
            ServiceError::Resolve(ref e) => e.to_string(),
            ServiceError::Store(ref e) => store_message(e),
            roster @ ServiceError::Roster(_) => return Err(roster.into()),
        };

        tracing::warn!(command = ?kind, %message, "Command rejected");

        Ok(Reply::Failure {
            usage: kind.usage(),
            message,
        })
    }
}
