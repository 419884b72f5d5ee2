//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use doubtgraph_resolver::ResolverConfig;
use doubtgraph_stats::DEFAULT_RANK_LIMIT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Roster file read on every command
    #[serde(default = "default_roster_path")]
    pub roster_path: PathBuf,

    /// Maximum number of members taken from the roster
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,

    /// Directory receiving rendered graphs
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Guild the session runs in
    #[serde(default = "default_guild")]
    pub guild: String,

    /// Entries per ranking list
    #[serde(default = "default_rank_limit")]
    pub rank_limit: usize,

    /// Attendee and ignored markers
    #[serde(flatten)]
    pub markers: ResolverConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".doubtgraph").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        if config.markers.attendee_marker.is_empty() {
            return Err(CliError::Config("attendee_marker must not be empty".into()));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: default_roster_path(),
            fetch_limit: default_fetch_limit(),
            output_dir: default_output_dir(),
            guild: default_guild(),
            rank_limit: default_rank_limit(),
            markers: ResolverConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("roster.toml")
}

fn default_fetch_limit() -> usize {
    150
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_guild() -> String {
    "default".to_string()
}

fn default_rank_limit() -> usize {
    DEFAULT_RANK_LIMIT
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}
