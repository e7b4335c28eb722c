// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::DEFAULT_OUT_FILE;
use crate::config::options::{AppOptions, TeamTarget};
use crate::error::Result;
use crate::file::resolve_out_path;
use crate::portal::HttpPortal;
use crate::progress::LogProgress;
use crate::runner;
use crate::specs::teams;

/// Merge basketball-bund.net team calendars into one iCalendar file.
#[derive(Parser, Debug)]
#[command(name = "bb_calendar", version, about)]
pub struct Args {
    /// TOML config with targets, output path and calendar metadata
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file (a trailing '/' or existing directory gets calendar.ics)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Team to track, repeatable; replaces configured teams, order is kept
    #[arg(short = 't', long = "team", value_name = "NAME=LEAGUE_ID")]
    pub teams: Vec<TeamTarget>,

    /// Round selector for the feed query (-1 = all rounds)
    #[arg(long, value_name = "SPT", allow_hyphen_values = true)]
    pub round: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the league's dropdown entries as `id,name` and exit
    #[arg(long, value_name = "LEAGUE_ID")]
    pub list_teams: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// CLI > config file > defaults.
    pub fn into_options(self) -> Result<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::load(path)?,
            None => AppOptions::default(),
        };

        if !self.teams.is_empty() {
            opts.targets = self.teams;
        }
        if let Some(out) = self.out {
            opts.out = resolve_out_path(&out, DEFAULT_OUT_FILE);
        }
        if let Some(round) = self.round {
            opts.round = round;
        }
        if let Some(secs) = self.timeout {
            opts.timeout_secs = secs;
        }
        Ok(opts)
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    if let Some(league_id) = args.list_teams.clone() {
        let opts = args.into_options()?;
        let portal = HttpPortal::new(opts.timeout())?;
        for c in teams::list(&portal, &league_id)? {
            println!("{},{}", c.value, c.raw_label);
        }
        return Ok(());
    }

    let opts = args.into_options()?;
    let portal = HttpPortal::new(opts.timeout())?;
    let summary = runner::run(&opts, &portal, Some(&mut LogProgress))?;

    println!("OK: {} Events -> {}", summary.events, summary.path.display());
    Ok(())
}
