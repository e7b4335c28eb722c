// src/bin/cli.rs
use bb_calendar::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
