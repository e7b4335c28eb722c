// src/log.rs
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: only warnings and errors,
/// so a normal run prints nothing but its summary line.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. `verbose` lowers the default to `info`
/// for this crate. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        format!("{DEFAULT_FILTER},bb_calendar=info")
    } else {
        s!(DEFAULT_FILTER)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
