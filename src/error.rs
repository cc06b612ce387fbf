///
/// @package codesign-check
///
/// @file Error functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::num::ParseIntError;
use thiserror::Error;

/// Problems with the positional argument
#[derive(Debug, Error)]
pub enum ArgError {
    #[error("No input provided. Please provide a decimal number as an argument.")]
    MissingArgument,

    #[error("Invalid input `{input}'. Please provide a decimal number as an argument.")]
    InvalidArgument {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
