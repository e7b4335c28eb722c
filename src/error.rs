// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal to the run; nothing here is retried or skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "team '{team}' not found in dropdown (liga_id={league_id}). Sample options: {}",
        samples.join(", ")
    )]
    NotFound {
        team: String,
        league_id: String,
        samples: Vec<String>,
    },

    #[error("no VEVENTs found for {team} (liga_id={league_id}, ms_liga_id={team_id})")]
    NoEvents {
        team: String,
        league_id: String,
        team_id: String,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
