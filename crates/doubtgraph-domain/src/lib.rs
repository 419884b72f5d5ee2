//! doubtgraph Domain Layer
//!
//! This crate contains the core data model for the trust/doubt relationship
//! graph. It depends only on `uuid` and defines the value objects and trait
//! interfaces that every other layer builds upon.
//!
//! ## Key Concepts
//!
//! - **Member**: an external chat member as reported by the roster, with markers
//! - **Player**: the graph-side record of one eligible member
//! - **Relation**: a directed trust or doubt edge between two players
//! - **Snapshot**: the derived, edge-connected view used for rendering and statistics
//!
//! ## Architecture
//!
//! - Pure data and invariants only
//! - Infrastructure implementations live in other crates
//! - The [`traits::RelationGraph`] trait is the only write path to a graph

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod member;
pub mod player;
pub mod relation;
pub mod snapshot;
pub mod traits;

// Re-exports for convenience
pub use member::{Member, MemberId};
pub use player::{Player, PlayerId};
pub use relation::{Relation, RelationKind};
pub use snapshot::GraphSnapshot;
pub use traits::RelationGraph;
