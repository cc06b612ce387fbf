///
/// @package codesign-check
///
/// @file Logger functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use log::{debug, LevelFilter};
use anyhow::{Context, Result};
use stdext::function_name;
use crate::config::Config;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LogLevel {
    None,
    Info,
    Warnings,
    Error,
    Debug,
    Trace,
}

impl From<&str> for LogLevel {
    fn from(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "none" => LogLevel::None,
            "warnings" => LogLevel::Warnings,
            "errors" => LogLevel::Error,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::None => LevelFilter::Off,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warnings => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Pick the effective level, debug overrides whatever was passed
#[must_use]
pub fn level_for(config: &Config) -> LogLevel {
    if config.debug {
        LogLevel::Debug
    } else {
        LogLevel::from(config.loglevel.as_str())
    }
}

/// Check config and init all log related options
///
/// # Arguments
///
/// * `config` - Config values read from args
///
/// # Returns
///
/// A `Result` with either `Unit` on success or otherwise `Error`
pub fn init(config: &Config) -> Result<()> {
    let filter = LevelFilter::from(level_for(config));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .filter_level(filter)
        .try_init()
        .context("Failed to init logger")?;

    debug!("{}", function_name!());

    Ok(())
}
