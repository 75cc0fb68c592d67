//! Deploys the farm contracts into a local sandbox ledger and replays the
//! deposit, wait, withdraw and harvest scripts against them.

mod config;
mod deployment;
mod scenario;

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use log::{debug, info};

use crate::{
    config::{Config, Network},
    deployment::Sandbox,
    scenario::Scenario,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::from_env().context("reading configuration")?;
    let scenario = match std::env::args().nth(1) {
        Some(name) => name.parse::<Scenario>()?,
        None => Scenario::Interact,
    };

    debug!("{config:?}");

    if let Network::Goerli { .. } = config.network {
        bail!("submitting to goerli is not supported by this harness, run with FARM_NETWORK=local");
    }

    info!("Running {scenario:?} against the local sandbox");

    scenario.run(&Sandbox::new())
}
