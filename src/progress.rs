// src/progress.rs
use crate::config::options::TeamTarget;

/// Lightweight progress reporting for a merge run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of configured targets.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once a target's feed has been fetched and rewritten.
    fn item_done(&mut self, _target: &TeamTarget, _events: usize) {}

    /// Called after the calendar has been written.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to `tracing` at info level.
pub struct LogProgress;
impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        tracing::info!(targets = total, "starting merge");
    }
    fn log(&mut self, msg: &str) {
        tracing::info!("{msg}");
    }
    fn item_done(&mut self, target: &TeamTarget, events: usize) {
        tracing::info!(team = %target.name, league = %target.league_id, events, "feed merged");
    }
}
