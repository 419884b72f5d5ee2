//! Player module - the graph-side identity of an eligible member

use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier for a player based on UUIDv7
///
/// A fresh id is allocated every time a player is created, so two players
/// with the same name or color tag are still distinct entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u128);

impl PlayerId {
    /// Generate a new UUIDv7-based PlayerId
    ///
    /// # Examples
    ///
    /// ```
    /// use doubtgraph_domain::PlayerId;
    ///
    /// let a = PlayerId::new();
    /// let b = PlayerId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A player in the relationship graph
///
/// Equality and hashing go through [`PlayerId`] only. Names and color tags
/// are display data and may collide between distinct members.
#[derive(Debug, Clone)]
pub struct Player {
    /// Identity of this player
    pub id: PlayerId,

    /// Display name of the underlying member
    pub name: String,

    /// Category marker, used both for disambiguation and display color
    pub color_tag: String,
}

impl Player {
    /// Create a new player with a freshly allocated id
    pub fn new(name: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            color_tag: color_tag.into(),
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
