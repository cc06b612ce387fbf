///
/// @package codesign-check
///
/// @file Decoder functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use bitflags::Flags;
use log::debug;
use stdext::function_name;
use crate::flags::CodeSignFlags;

pub const NAME_WIDTH: usize = 25;
pub const VALUE_WIDTH: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: &'static str,
    pub enabled: bool,
}

/// Decoded value with one row per known flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub value: i64,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Names of all enabled flags in table order
    #[must_use = "iterators are lazy"]
    pub fn enabled(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter()
            .filter(|row| row.enabled)
            .map(|row| row.name)
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<NAME_WIDTH$}{:<VALUE_WIDTH$}", self.name, self.enabled)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<NAME_WIDTH$}{:<VALUE_WIDTH$}", "Flag", "Is Enabled")?;

        for row in &self.rows {
            writeln!(f, "{row}")?;
        }

        Ok(())
    }
}

/// Test every known flag against the given value
///
/// # Arguments
///
/// * `value` - Decimal value as passed on the command line
///
/// # Returns
///
/// A `Report` with a row for every flag, set or not
#[must_use]
pub fn decode(value: i64) -> Report {
    let flags = CodeSignFlags::from(value);

    let rows: Vec<ReportRow> = CodeSignFlags::FLAGS.iter()
        .map(|flag| ReportRow {
            name: flag.name(),
            enabled: flags.intersects(*flag.value()),
        })
        .collect();

    debug!("{}: value={}, flags={:?}", function_name!(), value, flags);

    Report {
        value,
        rows,
    }
}
