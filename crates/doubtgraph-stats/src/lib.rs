//! doubtgraph Statistics Engine
//!
//! Counts incoming trust and doubt per player of the derived graph and
//! produces ranked top-N lists.
//!
//! Ties keep the graph's node order, which makes rankings reproducible for
//! the same sequence of commands.

#![warn(missing_docs)]

use doubtgraph_domain::{GraphSnapshot, Player, PlayerId, RelationKind};
use serde::Serialize;
use std::collections::HashMap;

/// Number of entries per list when no limit is given
pub const DEFAULT_RANK_LIMIT: usize = 3;

/// Incoming relation counts for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingCounts {
    /// The counted player
    pub player: Player,

    /// Incoming trust edges
    pub trust: usize,

    /// Incoming doubt edges
    pub doubt: usize,
}

impl IncomingCounts {
    /// Count for the given kind
    pub fn count(&self, kind: RelationKind) -> usize {
        match kind {
            RelationKind::Trust => self.trust,
            RelationKind::Doubt => self.doubt,
        }
    }
}

/// One row of a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    /// 1-based position
    pub rank: usize,

    /// Player display name
    pub name: String,

    /// Player category marker
    pub color_tag: String,

    /// Incoming edges of the ranked kind
    pub count: usize,
}

/// Top-N doubt and trust lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rankings {
    /// Most doubted players first
    pub doubt_ranked: Vec<RankEntry>,

    /// Most trusted players first
    pub trust_ranked: Vec<RankEntry>,
}

impl Rankings {
    /// True when neither list has entries
    pub fn is_empty(&self) -> bool {
        self.doubt_ranked.is_empty() && self.trust_ranked.is_empty()
    }
}

/// Per-node incoming counts, in node order
pub fn incoming_counts(snapshot: &GraphSnapshot) -> Vec<IncomingCounts> {
    let mut incoming: HashMap<PlayerId, (usize, usize)> = HashMap::new();
    for relation in &snapshot.relations {
        let (trust, doubt) = incoming.entry(relation.target).or_default();
        match relation.kind {
            RelationKind::Trust => *trust += 1,
            RelationKind::Doubt => *doubt += 1,
        }
    }

    snapshot
        .players
        .iter()
        .map(|player| {
            let (trust, doubt) = incoming.get(&player.id).copied().unwrap_or_default();
            IncomingCounts {
                player: player.clone(),
                trust,
                doubt,
            }
        })
        .collect()
}

/// Rank players by incoming doubt and trust
///
/// A player only appears in a list when it has at least one incoming edge of
/// that kind. Each list is truncated to `limit` entries.
pub fn compute_rankings(snapshot: &GraphSnapshot, limit: usize) -> Rankings {
    let counts = incoming_counts(snapshot);

    Rankings {
        doubt_ranked: rank(&counts, RelationKind::Doubt, limit),
        trust_ranked: rank(&counts, RelationKind::Trust, limit),
    }
}

fn rank(counts: &[IncomingCounts], kind: RelationKind, limit: usize) -> Vec<RankEntry> {
    let mut ranked: Vec<&IncomingCounts> = counts.iter().filter(|c| c.count(kind) > 0).collect();

    // Stable: equal counts keep node order
    ranked.sort_by(|a, b| b.count(kind).cmp(&a.count(kind)));

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, c)| RankEntry {
            rank: i + 1,
            name: c.player.name.clone(),
            color_tag: c.player.color_tag.clone(),
            count: c.count(kind),
        })
        .collect()
}
