//! File logging through `log4rs`.
//!
//! The terminal is owned by the game view, so log records only ever go to a
//! file. Without a configured path no logger is installed and the `log`
//! macros in the core compile down to no-ops at runtime.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(file_path)
        .with_context(|| format!("opening log file {}", file_path.display()))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("building log config")?;

    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}

/// Install the file logger when the configuration asks for one.
pub fn init_from_config(cfg: &crate::config::Config) -> Result<bool> {
    match &cfg.log_path {
        Some(path) => init_log(cfg.log_level, path).map(|()| true),
        None => Ok(false),
    }
}
