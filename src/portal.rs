// src/portal.rs
//! The two requests this tool makes against the league portal.
//!
//! `HttpPortal` talks to the live site; tests substitute canned pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::*;
use crate::core::net;
use crate::error::Result;

pub trait Portal {
    /// Schedule page for a league; carries the team dropdown.
    fn team_page(&self, league_id: &str) -> Result<String>;

    /// Raw iCalendar feed for one team in one league.
    fn calendar_feed(&self, league_id: &str, team_id: &str, round: &str) -> Result<String>;
}

pub struct HttpPortal {
    client: Client,
    base_url: String,
}

impl HttpPortal {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(BASE_URL, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: net::client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Portal for HttpPortal {
    fn team_page(&self, league_id: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, TEAMS_PATH);
        net::http_get(&self.client, &url, &[("Action", TEAMS_ACTION), ("liga_id", league_id)])
    }

    fn calendar_feed(&self, league_id: &str, team_id: &str, round: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, FEED_PATH);
        net::http_get(
            &self.client,
            &url,
            &[
                ("typ", FEED_TYPE),
                ("liga_id", league_id),
                ("ms_liga_id", team_id),
                ("spt", round),
            ],
        )
    }
}
