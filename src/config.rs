///
/// @package codesign-check
///
/// @file Config functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::ffi::{OsStr, OsString};
use clap::Parser;

pub const SYNOPSIS: &str = "Usage: codesign-check [-h] [-l LEVEL] [-D] <CodeSigningDecimal>";

pub const HELP: &str = "NAME
    codesign-check - CLI tool to check enabled code signing flags

SYNOPSIS
    codesign-check [flags] <CodeSigningDecimal>

DESCRIPTION
    codesign-check takes a decimal number as input and shows which code signing
    flags are enabled based on the input.

FLAGS
    -h, --help
        Show this help page.

    -l, --level LEVEL
        Set logging level LEVEL (none, info, warnings, errors, debug, trace).

    -D, --debug
        Print debugging messages.

    -V, --version
        Print version.

EXAMPLES
    codesign-check 123456789
        This command will show which code signing flags are enabled for the
        decimal number 123456789.

NOTES
    Each code signing flag is represented by a hexadecimal number, and each
    decimal input can correspond to multiple flags.
";

#[derive(Parser, Debug)]
#[command(name = "codesign-check", version, disable_help_flag = true)]
pub struct Config {
    /// Show this help page
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Set logging level LEVEL
    #[arg(short = 'l', long = "level", value_name = "LEVEL", default_value = "warnings")]
    pub loglevel: String,

    /// Print debugging messages
    #[arg(short = 'D', long = "debug")]
    pub debug: bool,

    /// Code signing flags as decimal number
    #[arg(value_name = "CodeSigningDecimal", allow_negative_numbers = true)]
    pub value: Option<String>,
}

#[derive(Debug)]
pub enum Invocation {
    Help,
    Decode(Config),
}

impl Config {
    /// Parse the command line, help wins over everything else
    ///
    /// # Arguments
    ///
    /// * `args` - Raw arguments including the program name
    ///
    /// # Returns
    ///
    /// A `Result` with either the `Invocation` on success or otherwise the clap `Error`
    pub fn load<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if wants_help(&args) {
            return Ok(Invocation::Help);
        }

        let config = Config::try_parse_from(&args)?;

        // Combined short flags like -Dh
        if config.help {
            return Ok(Invocation::Help);
        }

        Ok(Invocation::Decode(config))
    }
}

fn wants_help(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .map(OsString::as_os_str)
        .take_while(|arg| *arg != OsStr::new("--"))
        .any(|arg| arg == OsStr::new("--help") || arg == OsStr::new("-h"))
}
