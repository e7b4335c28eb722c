// src/specs/teams.rs
//! Scraping *spec* for the team dropdown.
//!
//! Purpose:
//! - Parse the league schedule page (`index.jsp?Action=101&liga_id=…`) and read the
//!   `<select name="cbMannschaftenFilter">` options as `(ms_liga_id, team label)` pairs.
//! - Fall back to every `<option>` in the document if that select is missing.
//! - Map a configured team name onto its internal id (`ms_liga_id`).
//!
//! Matching policy:
//! - Labels are compared via `core::sanitize::normalize`.
//! - Pass 1 wants exact equality; pass 2 accepts containment in either direction.
//! - Within a pass, the first candidate in document order wins. A club with several
//!   age-group teams ("TSV Grombühl", "TSV Grombühl 2", …) can therefore hit the wrong
//!   one on the substring pass; configure exact names to avoid that.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use crate::config::consts::{NO_SELECTION_VALUE, SAMPLE_OPTIONS, TEAM_SELECT_NAME};
use crate::config::options::TeamTarget;
use crate::core::sanitize::{normalize, normalize_ws};
use crate::error::{Error, Result};
use crate::portal::Portal;

/// One usable dropdown entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionCandidate {
    /// Label text with markup removed, as shown on the page.
    pub raw_label: String,
    /// `normalize(raw_label)`
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTeam {
    pub target: TeamTarget,
    pub team_id: String,
}

impl ResolvedTeam {
    pub fn prefix(&self) -> String {
        self.target.prefix(&self.team_id)
    }
}

static SEL_SELECT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("select").expect("invalid selector: select"));
static SEL_OPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("option").expect("invalid selector: option"));

/// Fetch the league page and resolve `target` to its internal team id.
pub fn resolve(portal: &dyn Portal, target: &TeamTarget) -> Result<ResolvedTeam> {
    let doc = portal.team_page(&target.league_id)?;
    let team_id = resolve_in(&doc, &target.name, &target.league_id)?;
    info!(team = %target.name, league = %target.league_id, %team_id, "resolved team");
    Ok(ResolvedTeam { target: target.clone(), team_id })
}

/// All usable dropdown entries for a league, in page order.
pub fn list(portal: &dyn Portal, league_id: &str) -> Result<Vec<OptionCandidate>> {
    let doc = portal.team_page(league_id)?;
    Ok(parse_options(&doc))
}

/// Resolve against an already fetched page.
pub fn resolve_in(doc: &str, team_name: &str, league_id: &str) -> Result<String> {
    let candidates = parse_options(doc);

    match find_match(team_name, &candidates) {
        Some(hit) => Ok(hit.value.clone()),
        None => Err(Error::NotFound {
            team: s!(team_name),
            league_id: s!(league_id),
            samples: candidates
                .iter()
                .take(SAMPLE_OPTIONS)
                .map(|c| c.raw_label.clone())
                .collect(),
        }),
    }
}

/// Exact pass first, then containment either way. First hit in list order wins.
pub fn find_match<'a>(team_name: &str, candidates: &'a [OptionCandidate]) -> Option<&'a OptionCandidate> {
    let wanted = normalize(team_name);

    candidates
        .iter()
        .find(|c| c.label == wanted)
        .or_else(|| {
            candidates
                .iter()
                .find(|c| wanted.contains(c.label.as_str()) || c.label.contains(wanted.as_str()))
        })
}

/// Extract `(value, label)` options from the team select, skipping the
/// "all teams" placeholder and empty values.
pub fn parse_options(doc: &str) -> Vec<OptionCandidate> {
    let html = Html::parse_document(doc);

    let team_select = html.select(&SEL_SELECT).find(|el| {
        el.value()
            .attr("name")
            .is_some_and(|n| n.eq_ignore_ascii_case(TEAM_SELECT_NAME))
    });

    let options: Vec<ElementRef> = match team_select {
        Some(select) => select.select(&SEL_OPTION).collect(),
        None => {
            warn!("select '{}' not found; scanning whole page", TEAM_SELECT_NAME);
            html.select(&SEL_OPTION).collect()
        }
    };

    options
        .into_iter()
        .filter_map(|opt| {
            let value = opt.value().attr("value")?.trim();
            if value.is_empty() || value == NO_SELECTION_VALUE {
                return None;
            }
            let raw_label = normalize_ws(&opt.text().collect::<String>());
            Some(OptionCandidate {
                label: normalize(&raw_label),
                raw_label,
                value: s!(value),
            })
        })
        .collect()
}
