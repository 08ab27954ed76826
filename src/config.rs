//! Run configuration for ranking.

use std::env;
use std::path::PathBuf;

use crate::constants::ROSTER_PATH_ENV;
use crate::ranking::Strategy;
use crate::source::{BuiltinRoster, RecordSource, RosterFile};

/// Configuration for a ranking run.
#[derive(Debug, Clone, Default)]
pub struct RankConfig {
    /// Roster file to load (None = built-in roster)
    pub roster_path: Option<PathBuf>,

    /// How the roster is ordered
    pub strategy: Strategy,

    /// Emit a JSON report instead of tables
    pub json: bool,
}

impl RankConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BESTIARY_ROSTER` - Roster file path (default: built-in roster)
    pub fn from_env() -> Self {
        Self {
            roster_path: read_env::<PathBuf>(ROSTER_PATH_ENV),
            ..Self::default()
        }
    }

    /// Quick config for round-robin scoring of the built-in roster
    pub fn round_robin() -> Self {
        Self {
            strategy: Strategy::RoundRobin,
            ..Self::default()
        }
    }

    /// Set the roster file, overriding any environment default.
    #[must_use]
    pub fn with_roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The record source this configuration selects.
    pub fn record_source(&self) -> Box<dyn RecordSource> {
        match &self.roster_path {
            Some(path) => Box::new(RosterFile::new(path.clone())),
            None => Box::new(BuiltinRoster),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
