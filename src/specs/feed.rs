// src/specs/feed.rs
//! Scraping *spec* for the calendar feed (`servlet/KalenderDienst`).
//!
//! The portal serves whatever line endings it likes; everything downstream
//! matches fields on CRLF-terminated lines, so the body is rewritten to CRLF
//! before it leaves this module.

use tracing::debug;

use super::teams::ResolvedTeam;
use crate::error::Result;
use crate::portal::Portal;

pub fn fetch_feed(portal: &dyn Portal, team: &ResolvedTeam, round: &str) -> Result<String> {
    let raw = portal.calendar_feed(&team.target.league_id, &team.team_id, round)?;
    debug!(team = %team.target.name, bytes = raw.len(), "feed fetched");
    Ok(to_crlf(&raw))
}

/// Rewrite LF, CR and CRLF line endings to CRLF.
pub fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").replace('\n', "\r\n")
}
