//! Read-only view of the relationship graph

use crate::{Player, PlayerId, Relation};
use std::collections::HashSet;

/// The relationship graph as seen by renderers and statistics
///
/// `players` holds exactly the players that participate in at least one
/// relation, in player insertion order. `relations` holds every stored edge
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSnapshot {
    /// Nodes of the derived graph
    pub players: Vec<Player>,

    /// Edges of the derived graph
    pub relations: Vec<Relation>,
}

impl GraphSnapshot {
    /// Build a snapshot from every known player and the current edges.
    ///
    /// Players that touch no relation are dropped here, on every call.
    pub fn from_parts<'a, I>(players: I, relations: Vec<Relation>) -> Self
    where
        I: IntoIterator<Item = &'a Player>,
    {
        let endpoints: HashSet<PlayerId> = relations
            .iter()
            .flat_map(|r| [r.source, r.target])
            .collect();
        let players = players
            .into_iter()
            .filter(|p| endpoints.contains(&p.id))
            .cloned()
            .collect();

        Self { players, relations }
    }

    /// True when the graph has no edges
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Look up a node by id
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
