//! The shared graph and its command-level operations

use crate::roster::{RosterProvider, SessionContext};
use crate::ServiceError;
use doubtgraph_domain::traits::RelationGraph;
use doubtgraph_domain::{GraphSnapshot, Member, MemberId, RelationKind};
use doubtgraph_resolver::{AttendeeResolver, Resolution};
use doubtgraph_stats::{compute_rankings, Rankings};
use doubtgraph_store::MemoryStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Snapshot handed to a rendering adapter after a mutation
pub type RenderableSnapshot = GraphSnapshot;

/// Owner of the one relationship graph
///
/// All writes go through the inner write lock, one at a time. Reads take the
/// read lock and may run alongside each other.
pub struct GraphService {
    store: RwLock<MemoryStore>,
    resolver: AttendeeResolver,
    roster: Arc<dyn RosterProvider>,
}

impl GraphService {
    /// Create a service with an empty graph
    pub fn new(resolver: AttendeeResolver, roster: Arc<dyn RosterProvider>) -> Self {
        Self {
            store: RwLock::new(MemoryStore::new()),
            resolver,
            roster,
        }
    }

    /// The resolver used for every command
    pub fn resolver(&self) -> &AttendeeResolver {
        &self.resolver
    }

    /// Record a relation of `kind` and return the updated graph
    pub async fn apply_relation(
        &self,
        ctx: &SessionContext,
        invoker: Option<&MemberId>,
        first: &str,
        second: Option<&str>,
        kind: RelationKind,
    ) -> Result<RenderableSnapshot, ServiceError> {
        let roster = self.fetch_roster(ctx, first, second).await?;

        let mut store = self.store.write().await;
        let Resolution { source, target } =
            self.resolver
                .resolve(&mut *store, invoker, &roster, first, second)?;
        store.set_relation(source.id, target.id, kind)?;

        Ok(store.snapshot())
    }

    /// Shorthand for [`GraphService::apply_relation`] with trust
    pub async fn trust(
        &self,
        ctx: &SessionContext,
        invoker: Option<&MemberId>,
        first: &str,
        second: Option<&str>,
    ) -> Result<RenderableSnapshot, ServiceError> {
        self.apply_relation(ctx, invoker, first, second, RelationKind::Trust)
            .await
    }

    /// Shorthand for [`GraphService::apply_relation`] with doubt
    pub async fn doubt(
        &self,
        ctx: &SessionContext,
        invoker: Option<&MemberId>,
        first: &str,
        second: Option<&str>,
    ) -> Result<RenderableSnapshot, ServiceError> {
        self.apply_relation(ctx, invoker, first, second, RelationKind::Doubt)
            .await
    }

    /// Remove the relation between the resolved pair, whatever its kind
    pub async fn clear_relation(
        &self,
        ctx: &SessionContext,
        invoker: Option<&MemberId>,
        first: &str,
        second: Option<&str>,
    ) -> Result<RenderableSnapshot, ServiceError> {
        let roster = self.fetch_roster(ctx, first, second).await?;

        let mut store = self.store.write().await;
        let Resolution { source, target } =
            self.resolver
                .resolve(&mut *store, invoker, &roster, first, second)?;
        store.remove_relation(source.id, target.id)?;

        Ok(store.snapshot())
    }

    /// Drop every player and relation
    pub async fn clear_all(&self) {
        self.store.write().await.clear_all();
    }

    /// Current filtered graph
    pub async fn snapshot(&self) -> GraphSnapshot {
        self.store.read().await.snapshot()
    }

    /// Top-`limit` doubt and trust rankings of the current graph
    pub async fn rankings(&self, limit: usize) -> Rankings {
        let snapshot = self.snapshot().await;
        compute_rankings(&snapshot, limit)
    }

    /// Duplicate identifiers are rejected before the provider is asked
    async fn fetch_roster(
        &self,
        ctx: &SessionContext,
        first: &str,
        second: Option<&str>,
    ) -> Result<Vec<Member>, ServiceError> {
        self.resolver.check_identifiers(first, second)?;
        self.roster
            .fetch_roster(ctx)
            .await
            .map_err(ServiceError::Roster)
    }
}
