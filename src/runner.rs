// src/runner.rs
use std::path::PathBuf;

use tracing::{debug, info};

use crate::calendar::{self, EventRecord};
use crate::config::options::{AppOptions, TeamTarget};
use crate::error::{Error, Result};
use crate::file::write_calendar;
use crate::portal::Portal;
use crate::progress::{NullProgress, Progress};
use crate::specs::{feed, teams};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    /// Events in the written calendar, after dedup.
    pub events: usize,
    /// Events contributed per target, before dedup.
    pub per_target: Vec<(TeamTarget, usize)>,
}

/// Top-level runner: resolve, fetch and rewrite every target in order, merge,
/// then write the calendar once. Any failure aborts before the file is touched.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    portal: &dyn Portal,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let (events, per_target) = collect_events(opts, portal, progress)?;

    let merged = calendar::merge(events);
    let doc = calendar::assemble(&merged, &opts.calendar);
    write_calendar(&opts.out, &doc)?;
    info!(events = merged.len(), path = %opts.out.display(), "calendar written");
    progress.finish();

    Ok(RunSummary { path: opts.out.clone(), events: merged.len(), per_target })
}

/// Transformed events of every target, concatenated in target order.
/// Not deduplicated.
pub fn collect_events(
    opts: &AppOptions,
    portal: &dyn Portal,
    progress: &mut dyn Progress,
) -> Result<(Vec<EventRecord>, Vec<(TeamTarget, usize)>)> {
    if opts.targets.is_empty() {
        return Err(Error::Config(s!("no teams configured")));
    }

    progress.begin(opts.targets.len());

    let mut merged = Vec::new();
    let mut per_target = Vec::with_capacity(opts.targets.len());

    for target in &opts.targets {
        progress.log(&format!("{} (liga_id={})", target.name, target.league_id));

        let team = teams::resolve(portal, target)?;
        let ics = feed::fetch_feed(portal, &team, &opts.round)?;

        let events = calendar::extract_events(&ics);
        if events.is_empty() {
            return Err(Error::NoEvents {
                team: target.name.clone(),
                league_id: target.league_id.clone(),
                team_id: team.team_id,
            });
        }
        debug!(team = %target.name, events = events.len(), "extracted");

        let prefix = team.prefix();
        let count = events.len();
        merged.extend(events.iter().map(|ev| calendar::transform(ev, &prefix, &target.name)));

        progress.item_done(target, count);
        per_target.push((target.clone(), count));
    }

    Ok((merged, per_target))
}
