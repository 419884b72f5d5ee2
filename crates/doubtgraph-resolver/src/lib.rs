//! doubtgraph Attendee Resolver
//!
//! Turns the raw identifiers of a command into a validated
//! `(source, target)` pair of players.
//!
//! The resolver provides:
//! - Duplicate identifier detection
//! - Eligibility checks against the participation marker
//! - Lazy player creation for every eligible member
//! - Default-to-self and self-targeting validation
//!
//! # Examples
//!
//! ```
//! use doubtgraph_domain::Member;
//! use doubtgraph_resolver::{AttendeeResolver, ResolverConfig};
//! use doubtgraph_store::MemoryStore;
//!
//! let resolver = AttendeeResolver::new(ResolverConfig::default());
//! let alice = Member::new("1", "alice", ["attendees", "red"]);
//! let bob = Member::new("2", "bob", ["attendees", "blue"]);
//! let roster = vec![alice.clone(), bob];
//!
//! let mut store = MemoryStore::new();
//! let pair = resolver
//!     .resolve(&mut store, Some(&alice.id), &roster, "blue", None)
//!     .unwrap();
//! assert_eq!(pair.target.name, "bob");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod resolver;

pub use config::ResolverConfig;
pub use error::ResolveError;
pub use resolver::{AttendeeResolver, Resolution};
