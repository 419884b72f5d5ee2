//! Service error types

use crate::roster::RosterError;
use doubtgraph_resolver::ResolveError;
use doubtgraph_store::StoreError;
use thiserror::Error;

/// Errors surfaced by graph operations
///
/// Resolver and store errors pass through unchanged; roster failures stay opaque.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Identifiers could not be resolved
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The store rejected the mutation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The roster provider failed
    #[error("Roster provider failed: {0}")]
    Roster(#[source] RosterError),
}
