//! Roster provider boundary
//!
//! A roster is the full list of current members with their markers. It is
//! fetched once per resolution and never cached by the service.

use async_trait::async_trait;
use doubtgraph_domain::Member;
use tokio::sync::RwLock;

/// Opaque failure reported by a roster provider
pub type RosterError = Box<dyn std::error::Error + Send + Sync>;

/// Guild/session a command was issued in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    /// Guild identifier
    pub guild: String,
}

impl SessionContext {
    /// Create a context for the given guild
    pub fn new(guild: impl Into<String>) -> Self {
        Self {
            guild: guild.into(),
        }
    }
}

/// Source of the current member list
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Fetch every current member of the session's guild
    async fn fetch_roster(&self, ctx: &SessionContext) -> Result<Vec<Member>, RosterError>;
}

/// In-memory roster, replaceable at runtime
#[derive(Debug, Default)]
pub struct StaticRoster {
    members: RwLock<Vec<Member>>,
}

impl StaticRoster {
    /// Create a roster with the given members
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members: RwLock::new(members),
        }
    }

    /// Replace the member list
    pub async fn set_members(&self, members: Vec<Member>) {
        *self.members.write().await = members;
    }
}

#[async_trait]
impl RosterProvider for StaticRoster {
    async fn fetch_roster(&self, _ctx: &SessionContext) -> Result<Vec<Member>, RosterError> {
        Ok(self.members.read().await.clone())
    }
}
