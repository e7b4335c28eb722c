// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

/// One tracked team: its display name as shown in the portal dropdown,
/// and the league it plays in.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TeamTarget {
    #[serde(rename = "team")]
    pub name: String,
    #[serde(rename = "league")]
    pub league_id: String,
}

impl TeamTarget {
    pub fn new(name: impl Into<String>, league_id: impl Into<String>) -> Self {
        Self { name: name.into(), league_id: league_id.into() }
    }

    /// Namespace for UIDs coming out of this team's feed.
    pub fn prefix(&self, team_id: &str) -> String {
        format!("liga{}-team{}", self.league_id, team_id)
    }
}

/// `"<name>=<league id>"`, as accepted by `--team`.
impl FromStr for TeamTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, league) = s
            .rsplit_once('=')
            .ok_or_else(|| Error::Config(format!("expected NAME=LEAGUE_ID, got '{s}'")))?;
        let (name, league) = (name.trim(), league.trim());
        if name.is_empty() || league.is_empty() {
            return Err(Error::Config(format!("expected NAME=LEAGUE_ID, got '{s}'")));
        }
        Ok(Self::new(name, league))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub name: String,
    pub timezone: String,
    pub product_id: String,
    pub refresh_ttl: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            name: s!(CAL_NAME),
            timezone: s!(CAL_TIMEZONE),
            product_id: s!(CAL_PRODID),
            refresh_ttl: s!(CAL_TTL),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    /// Processed in this order; output order follows it.
    pub targets: Vec<TeamTarget>,
    /// `spt` query value; `-1` = all rounds.
    pub round: String,
    pub out: PathBuf,
    pub timeout_secs: u64,
    pub calendar: CalendarOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            targets: DEFAULT_TARGETS
                .iter()
                .map(|(name, league)| TeamTarget::new(*name, *league))
                .collect(),
            round: s!(ALL_ROUNDS),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            calendar: CalendarOptions::default(),
        }
    }
}

impl AppOptions {
    /// Parse a TOML config. Missing keys fall back to the defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
