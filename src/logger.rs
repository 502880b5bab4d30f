use anyhow::Result;
use simple_logger::init_with_level;
use std::env;

/// Logs at `Info`, or `Debug` when the runner has step debugging enabled.
pub fn init() -> Result<()> {
    let level = if env::var("RUNNER_DEBUG").is_ok_and(|value| value == "1") {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    init_with_level(level)?;

    Ok(())
}
