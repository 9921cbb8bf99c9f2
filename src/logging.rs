//! File logging. The terminal belongs to the TUI, so log output goes to
//! `rtp_drill.log` instead of stderr.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::Path;

pub const LOG_FILE: &str = "rtp_drill.log";
/// Log level override (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_ENV: &str = "RTP_DRILL_LOG";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LogInitError {
    #[error("cannot create log file: {0}")]
    File(#[from] std::io::Error),
    #[error("logger already set: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Level from `$RTP_DRILL_LOG`, `Info` when unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Install a global logger writing to `path`, truncating any previous run.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), LogInitError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file = File::create(path)?;
    WriteLogger::init(level, config, file)?;
    log::info!("rtp-drill {} logging to {}", crate::VERSION, path.display());
    Ok(())
}
