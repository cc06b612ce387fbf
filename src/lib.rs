///
/// @package codesign-check
///
/// @file Library functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

pub mod config;
pub mod decoder;
pub mod error;
pub mod flags;
pub mod logger;

#[cfg(test)]
mod tests;

use std::io::Write;
use anyhow::{Context, Result};
use log::{debug, info};
use stdext::function_name;
use crate::config::{Config, HELP};
use crate::decoder::decode;
use crate::error::ArgError;

/// Parse the positional argument as base-10 integer
pub fn parse_value(config: &Config) -> Result<i64, ArgError> {
    let input = config.value.as_deref()
        .ok_or(ArgError::MissingArgument)?;

    input.parse::<i64>().map_err(|source| ArgError::InvalidArgument {
        input: input.into(),
        source,
    })
}

/// Decode the configured value and write the report
///
/// # Arguments
///
/// * `config` - Config values read from args
/// * `out` - Writer for the report
///
/// # Returns
///
/// A `Result` with either `Unit` on success or otherwise `Error`
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    debug!("{}", function_name!());

    let value = parse_value(config)?;
    let report = decode(value);

    info!("Value {} has {} of {} flags enabled", value,
        report.enabled().count(), report.rows.len());

    write!(out, "{report}").context("Failed to write report")?;
    out.flush().context("Failed to flush report")
}

pub fn write_help<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{HELP}").context("Failed to write help")?;
    out.flush().context("Failed to flush help")
}
