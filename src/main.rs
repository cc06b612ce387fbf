///
/// @package codesign-check
///
/// @file Main functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::{env, io};
use anyhow::{Context, Result};
use log::{debug, info};
use codesign_check::config::{Config, Invocation, SYNOPSIS};
use codesign_check::error::ArgError;
use codesign_check::logger;

fn print_version() {
    info!("{} {} - Copyright (c) 2025-present {}",
        env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"));
    info!("Released under the GNU Public License");
}

fn main() -> Result<()> {
    let config = match Config::load(env::args_os()) {
        Ok(Invocation::Decode(config)) => config,
        Ok(Invocation::Help) => return codesign_check::write_help(&mut io::stdout().lock()),

        // Version output
        Err(err) if !err.use_stderr() => return err.print().context("Failed to print version"),
        Err(err) => return Err(err).context("Failed to parse arguments"),
    };

    logger::init(&config)?;

    print_version();
    debug!("Config: {:?}", config);

    if let Err(err) = codesign_check::run(&config, &mut io::stdout().lock()) {
        if let Some(ArgError::MissingArgument) = err.downcast_ref::<ArgError>() {
            eprintln!("{SYNOPSIS}");
        }

        return Err(err);
    }

    info!("Exit");

    Ok(())
}
