//! Resolver error types

use thiserror::Error;

/// Errors that can occur while resolving command identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Both identifiers name the same category marker
    #[error("duplicate role.")]
    DuplicateRole,

    /// An identifier (or the invoker) does not resolve to an eligible member
    #[error("{0} is not attendee.")]
    NotAttendee(String),

    /// Source and target resolve to the same member
    #[error("cannot specify yourself.")]
    SpecifyYourself,

    /// The one-identifier form was used without an invoking member
    #[error("no invoking member.")]
    MissingInvoker,
}
