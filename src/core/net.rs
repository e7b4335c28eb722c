// src/core/net.rs

// Blocking HTTP GET against the portal. One request at a time, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|source| Error::Fetch { url: s!("<client>"), source })
}

/// GET `url?query` and return the body as text.
/// Transport errors, timeouts and non-2xx statuses all surface as `Error::Fetch`.
pub fn http_get(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<String> {
    debug!(url, ?query, "GET");

    let fail = |source| Error::Fetch { url: s!(url), source };
    let resp = client.get(url).query(query).send().map_err(fail)?;
    let resp = resp.error_for_status().map_err(fail)?;
    let body = resp.text().map_err(fail)?;

    debug!(url, bytes = body.len(), "response");
    Ok(body)
}
