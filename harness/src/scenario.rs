use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};
use farm::{Errors, LOCK_TIERS, MONTH};
use log::info;
use soroban_sdk::Address;

use crate::deployment::{deploy, deploy_fiat, settle, Deployment, Sandbox, UNIT};

pub const INITIAL_SUPPLY: i128 = 1_000_000 * UNIT;
pub const FARM_ALLOWANCE: i128 = 10_000_000_000;

const SWEEP_AMOUNT: i128 = 100 * UNIT;
const SWEEP_WAITS: [u64; 4] = [1_000, 1_000_000, 40_000_000, 1_000_000_000];

// size of the default local signer set, operator included
pub const ACCOUNTS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Accounts,
    MakeFiat,
    Interact,
    Sweep,
}

impl FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "accounts" => Ok(Scenario::Accounts),
            "make-fiat" => Ok(Scenario::MakeFiat),
            "farm" => Ok(Scenario::Interact),
            "sweep" => Ok(Scenario::Sweep),
            other => bail!(
                "unknown scenario `{other}`, expected `accounts`, `make-fiat`, `farm` or `sweep`"
            ),
        }
    }
}

impl Scenario {
    pub fn run(self, sandbox: &Sandbox) -> Result<()> {
        match self {
            Scenario::Accounts => accounts(sandbox).map(|_| ()),
            Scenario::MakeFiat => make_fiat(sandbox).map(|_| ()),
            Scenario::Interact => interact(sandbox).map(|_| ()),
            Scenario::Sweep => sweep(sandbox).map(|_| ()),
        }
    }
}

fn usdc(amount: i128) -> f64 {
    amount as f64 / UNIT as f64
}

fn ensure_delta(step: &str, observed: i128, expected: i128) -> Result<()> {
    ensure!(
        observed == expected,
        "{step}: expected a balance change of {expected}, observed {observed}"
    );

    Ok(())
}

/// The operator followed by freshly generated signers.
pub fn accounts(sandbox: &Sandbox) -> Result<Vec<Address>> {
    let accounts: Vec<Address> = std::iter::once(sandbox.operator.clone())
        .chain((1..ACCOUNTS).map(|_| sandbox.signer()))
        .collect();

    for account in &accounts {
        info!("{:?}", account);
    }

    Ok(accounts)
}

pub fn make_fiat(sandbox: &Sandbox) -> Result<Address> {
    let fiat = deploy_fiat(sandbox, INITIAL_SUPPLY);
    let client = fake_usdc::FakeUsdcClient::new(&sandbox.env, &fiat);

    info!("Fiat contract deployed to: {:?}", fiat);

    let balance = settle("balance", client.try_balance(&sandbox.operator))?;
    info!("Minted {} to {:?}", usdc(balance), sandbox.operator);

    ensure_delta("mint", balance, INITIAL_SUPPLY)?;

    Ok(fiat)
}

fn set_allowance(sandbox: &Sandbox, deployment: &Deployment) -> Result<()> {
    let fiat = deployment.fiat(sandbox);
    let operator = &deployment.operator;

    info!("Interacting using address {:?}", operator);

    settle(
        "increase_allowance",
        fiat.try_increase_allowance(operator, &deployment.farm, &FARM_ALLOWANCE),
    )?;
    info!("Made allowance");

    let allowance = settle("allowance", fiat.try_allowance(operator, &deployment.farm))?;
    info!("Current farm allowance: ${}", usdc(allowance));

    ensure_delta("allowance", allowance, FARM_ALLOWANCE)
}

fn fund(sandbox: &Sandbox, deployment: &Deployment, farmer: &Address, amount: i128) -> Result<()> {
    let fiat = deployment.fiat(sandbox);

    settle(
        "fund farmer",
        fiat.try_transfer(&deployment.operator, farmer, &amount),
    )?;
    settle(
        "approve farm",
        fiat.try_increase_allowance(farmer, &deployment.farm, &amount),
    )
}

fn deposit(
    sandbox: &Sandbox,
    deployment: &Deployment,
    farmer: &Address,
    amount: i128,
    lock_months: u32,
) -> Result<u32> {
    let id = settle(
        "deposit",
        deployment
            .farm(sandbox)
            .try_deposit(farmer, &amount, &lock_months),
    )?;

    info!(
        "\tMade deposit ${} ({} month lock)",
        usdc(amount),
        lock_months
    );

    Ok(id)
}

/// `None` when the farm rejects the withdrawal because the lock has not expired.
fn withdraw(
    sandbox: &Sandbox,
    deployment: &Deployment,
    farmer: &Address,
    amount: i128,
) -> Result<Option<i128>> {
    let fiat = deployment.fiat(sandbox);
    let before = settle("balance", fiat.try_balance(farmer))?;

    match deployment.farm(sandbox).try_withdraw(farmer, &amount) {
        Err(Ok(err)) if err == soroban_sdk::Error::from(Errors::LockNotExpired) => {
            info!(
                "\tWithdrawal of ${} rejected, lock not expired",
                usdc(amount)
            );

            return Ok(None);
        }
        result => settle("withdraw", result)?,
    };
    info!("\tMade withdrawal of ${}", usdc(amount));

    let after = settle("balance", fiat.try_balance(farmer))?;
    info!("\tWithdrew {} USDC", usdc(after - before));

    ensure_delta("withdraw", after - before, amount)?;

    Ok(Some(amount))
}

fn harvest(sandbox: &Sandbox, deployment: &Deployment, farmer: &Address) -> Result<i128> {
    let farm = deployment.farm(sandbox);
    let coin = deployment.farm_coin(sandbox);

    let pending = settle("pending_reward", farm.try_pending_reward(farmer))?;
    let before = settle("balance", coin.try_balance(farmer))?;
    let reward = settle("harvest", farm.try_harvest(farmer))?;
    let after = settle("balance", coin.try_balance(farmer))?;

    info!("\tHarvested {} Farmcoin", usdc(after - before));

    ensure_delta("harvest", after - before, reward)?;
    ensure_delta("harvest", reward, pending)?;

    Ok(reward)
}

/// Deposit, lock-period wait, withdrawal and harvest as one signer.
pub fn interact(sandbox: &Sandbox) -> Result<Deployment> {
    let deployment = deploy(sandbox, INITIAL_SUPPLY)?;
    let operator = &deployment.operator;

    set_allowance(sandbox, &deployment)?;

    info!("Interacting using address {:?}", operator);

    deposit(sandbox, &deployment, operator, 1000 * UNIT, 0)?;
    sandbox.wait(3 * MONTH);
    deposit(sandbox, &deployment, operator, 1000 * UNIT, 6)?;

    // only the first 1000 has matured
    if withdraw(sandbox, &deployment, operator, 1500 * UNIT)?.is_some() {
        bail!("withdrawal beyond the matured principal was accepted");
    }

    withdraw(sandbox, &deployment, operator, 500 * UNIT)?
        .context("withdrawal of matured principal was rejected")?;
    harvest(sandbox, &deployment, operator)?;

    Ok(deployment)
}

/// Every lock tier against a range of waits, each case with a fresh signer.
pub fn sweep(sandbox: &Sandbox) -> Result<Deployment> {
    let deployment = deploy(sandbox, INITIAL_SUPPLY)?;

    for (lock_months, _) in LOCK_TIERS {
        for wait in SWEEP_WAITS {
            let farmer = sandbox.signer();

            info!(
                "[Testing deposit of ${} ({} month lock)]",
                usdc(SWEEP_AMOUNT),
                lock_months
            );

            fund(sandbox, &deployment, &farmer, SWEEP_AMOUNT)?;
            deposit(sandbox, &deployment, &farmer, SWEEP_AMOUNT, lock_months)?;
            sandbox.wait(wait);

            let matured = wait >= lock_months as u64 * MONTH;
            let withdrawn = withdraw(sandbox, &deployment, &farmer, SWEEP_AMOUNT)?;

            ensure!(
                withdrawn.is_some() == matured,
                "{lock_months} month lock after {wait} seconds: expected matured={matured}"
            );

            harvest(sandbox, &deployment, &farmer)?;
        }
    }

    Ok(deployment)
}
