//! doubtgraph Graph Mutation Service
//!
//! Orchestrates the resolver and the store to implement trust, doubt, clear
//! and clear-all as atomic operations on one shared graph.
//!
//! The roster is fetched before the write lock is taken; resolution and the
//! store update then run as a single critical section, so readers never see
//! a half-applied command.

#![warn(missing_docs)]

pub mod error;
pub mod roster;
pub mod service;

pub use error::ServiceError;
pub use roster::{RosterError, RosterProvider, SessionContext, StaticRoster};
pub use service::{GraphService, RenderableSnapshot};
