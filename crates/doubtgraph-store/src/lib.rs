//! doubtgraph Storage Layer
//!
//! Implements the [`RelationGraph`] trait with an in-memory store.
//!
//! # Architecture
//!
//! - Players are nodes of a `petgraph` stable graph, indexed by external member id
//! - Relations are edges; at most one per ordered `(source, target)` pair, writes overwrite
//! - Snapshots recompute the edge-connected node set on every call
//!
//! # Examples
//!
//! ```
//! use doubtgraph_domain::{MemberId, RelationGraph, RelationKind};
//! use doubtgraph_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let a = store.upsert_player(&MemberId::new("1"), "alice", "red").id;
//! let b = store.upsert_player(&MemberId::new("2"), "bob", "blue").id;
//! store.set_relation(a, b, RelationKind::Trust).unwrap();
//! assert_eq!(store.snapshot().relations.len(), 1);
//! ```

#![warn(missing_docs)]

use doubtgraph_domain::traits::RelationGraph;
use doubtgraph_domain::{GraphSnapshot, MemberId, Player, PlayerId, Relation, RelationKind};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Source and target are the same player
    #[error("invalid relation.")]
    InvalidRelation,

    /// No relation stored for the ordered pair
    #[error("no such relation.")]
    NoSuchRelation,

    /// Relation endpoint is not a known player
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
}

/// Weight of a stored edge
///
/// `seq` orders edges by first insertion; an overwrite keeps it.
#[derive(Debug, Clone, Copy)]
struct Edge {
    kind: RelationKind,
    seq: u64,
}

/// In-memory implementation of RelationGraph
///
/// Players are the nodes of a stable directed graph and relations are its
/// edges. Nodes are only ever removed all at once, so node order is
/// insertion order.
///
/// # Thread Safety
///
/// The store itself is not synchronized. Share it behind a lock that
/// serializes writers (see `doubtgraph-service`).
#[derive(Debug, Default)]
pub struct MemoryStore {
    graph: StableDiGraph<Player, Edge>,
    by_member: HashMap<MemberId, NodeIndex>,
    by_player: HashMap<PlayerId, NodeIndex>,
    next_seq: u64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known players, including isolated ones
    pub fn player_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stored relations
    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Kind stored for the ordered pair, if any
    pub fn relation(&self, source: PlayerId, target: PlayerId) -> Option<RelationKind> {
        self.edge(source, target).map(|e| self.graph[e].kind)
    }

    fn node(&self, id: PlayerId) -> Result<NodeIndex, StoreError> {
        self.by_player
            .get(&id)
            .copied()
            .ok_or(StoreError::UnknownPlayer(id))
    }

    fn edge(&self, source: PlayerId, target: PlayerId) -> Option<EdgeIndex> {
        let source = self.by_player.get(&source)?;
        let target = self.by_player.get(&target)?;
        self.graph.find_edge(*source, *target)
    }
}

impl RelationGraph for MemoryStore {
    type Error = StoreError;

    fn upsert_player(&mut self, member: &MemberId, name: &str, color_tag: &str) -> &Player {
        let index = match self.by_member.get(member) {
            Some(&index) => index,
            None => {
                let player = Player::new(name, color_tag);
                let id = player.id;
                let index = self.graph.add_node(player);
                self.by_member.insert(member.clone(), index);
                self.by_player.insert(id, index);
                index
            }
        };

        &self.graph[index]
    }

    fn player(&self, member: &MemberId) -> Option<&Player> {
        self.by_member
            .get(member)
            .and_then(|&i| self.graph.node_weight(i))
    }

    fn set_relation(
        &mut self,
        source: PlayerId,
        target: PlayerId,
        kind: RelationKind,
    ) -> Result<(), Self::Error> {
        if source == target {
            return Err(StoreError::InvalidRelation);
        }
        let s = self.node(source)?;
        let t = self.node(target)?;

        // Last write wins; the pair keeps its position
        match self.graph.find_edge(s, t) {
            Some(e) => self.graph[e].kind = kind,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.graph.add_edge(s, t, Edge { kind, seq });
            }
        }

        Ok(())
    }

    fn remove_relation(
        &mut self,
        source: PlayerId,
        target: PlayerId,
    ) -> Result<RelationKind, Self::Error> {
        self.edge(source, target)
            .and_then(|e| self.graph.remove_edge(e))
            .map(|edge| edge.kind)
            .ok_or(StoreError::NoSuchRelation)
    }

    fn clear_all(&mut self) {
        self.graph.clear();
        self.by_member.clear();
        self.by_player.clear();
        self.next_seq = 0;
    }

    fn snapshot(&self) -> GraphSnapshot {
        let mut edges: Vec<(u64, Relation)> = self
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (s, t) = self.graph.edge_endpoints(e)?;
                let Edge { kind, seq } = self.graph[e];
                Some((seq, Relation::new(self.graph[s].id, self.graph[t].id, kind)))
            })
            .collect();
        // Freed edge slots are reused, so index order is not insertion order
        edges.sort_by_key(|(seq, _)| *seq);

        GraphSnapshot::from_parts(
            self.graph.node_indices().map(|n| &self.graph[n]),
            edges.into_iter().map(|(_, r)| r).collect(),
        )
    }
}
