//! Trait definitions for graph storage
//!
//! These traits define the boundary between domain logic and the store.
//! Implementations live in other crates.

use crate::{GraphSnapshot, MemberId, Player, PlayerId, RelationKind};

/// Trait for owning players and relations
///
/// Implemented by the infrastructure layer (doubtgraph-store). Its mutating
/// methods are the only write path to a graph.
pub trait RelationGraph {
    /// Error type for graph operations
    type Error;

    /// Return the player for `member`, creating it if this member is new.
    ///
    /// Idempotent: an existing player is returned unchanged.
    fn upsert_player(&mut self, member: &MemberId, name: &str, color_tag: &str) -> &Player;

    /// Look up the player created for `member`
    fn player(&self, member: &MemberId) -> Option<&Player>;

    /// Insert or overwrite the relation for the ordered pair
    fn set_relation(
        &mut self,
        source: PlayerId,
        target: PlayerId,
        kind: RelationKind,
    ) -> Result<(), Self::Error>;

    /// Remove the relation for the ordered pair, whatever its kind
    fn remove_relation(
        &mut self,
        source: PlayerId,
        target: PlayerId,
    ) -> Result<RelationKind, Self::Error>;

    /// Drop every player and relation
    fn clear_all(&mut self);

    /// Filtered read-only view of the graph
    fn snapshot(&self) -> GraphSnapshot;
}
