//! Roster provider backed by a TOML file.
//!
//! The file is re-read on every fetch so edits show up on the next command.

use crate::error::{CliError, Result};
use async_trait::async_trait;
use doubtgraph_domain::Member;
use doubtgraph_service::{RosterError, RosterProvider, SessionContext};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk roster format.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Guild the roster belongs to
    #[serde(default)]
    pub guild: Option<String>,

    /// Members in platform order
    #[serde(default)]
    pub members: Vec<RosterEntry>,
}

/// One member of the roster file.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    /// Platform user id
    pub id: String,

    /// Display name
    pub name: String,

    /// Roles held
    #[serde(default)]
    pub markers: Vec<String>,

    /// Bot accounts never take part
    #[serde(default)]
    pub bot: bool,
}

impl From<RosterEntry> for Member {
    fn from(entry: RosterEntry) -> Self {
        Member::new(entry.id.as_str(), entry.name, entry.markers)
    }
}

/// Reads members from a roster file.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
    fetch_limit: usize,
}

impl FileRoster {
    /// Create a provider reading `path`, keeping at most `fetch_limit` members.
    pub fn new<P: AsRef<Path>>(path: P, fetch_limit: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            fetch_limit,
        }
    }

    /// Read and parse the roster file.
    pub async fn load(&self) -> Result<RosterFile> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CliError::Roster(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let file: RosterFile = toml::from_str(&contents)?;
        Ok(file)
    }

    /// Non-bot members among the first `fetch_limit` entries.
    pub async fn members(&self) -> Result<Vec<Member>> {
        let file = self.load().await?;
        let members: Vec<Member> = file
            .members
            .into_iter()
            .take(self.fetch_limit)
            .filter(|entry| !entry.bot)
            .map(Member::from)
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            count = members.len(),
            "Loaded roster"
        );

        Ok(members)
    }
}

#[async_trait]
impl RosterProvider for FileRoster {
    async fn fetch_roster(
        &self,
        ctx: &SessionContext,
    ) -> std::result::Result<Vec<Member>, RosterError> {
        tracing::debug!(guild = %ctx.guild, "Fetching roster");
        self.members().await.map_err(RosterError::from)
    }
}
