//! Relation module - directed trust/doubt edges between players

use super::PlayerId;
use std::fmt;

/// Kind of a relation between two players
///
/// The two kinds are mutually exclusive: an ordered pair holds at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Source trusts target
    Trust,

    /// Source suspects target
    Doubt,
}

impl RelationKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Trust => "trust",
            RelationKind::Doubt => "doubt",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed edge between two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation {
    /// Player holding the opinion
    pub source: PlayerId,

    /// Player the opinion is about
    pub target: PlayerId,

    /// Trust or doubt
    pub kind: RelationKind,
}

impl Relation {
    /// Create a new relation
    pub fn new(source: PlayerId, target: PlayerId, kind: RelationKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    /// Whether this relation points from a player to itself
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
