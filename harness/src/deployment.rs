use std::fmt::Debug;

use anyhow::{anyhow, Result};
use fake_usdc::{FakeUsdc, FakeUsdcClient, DECIMALS};
use farm::{Farm, FarmClient, MONTH};
use farm_coin::{FarmCoin, FarmCoinClient};
use log::info;
use soroban_sdk::{
    testutils::{Address as _, EnvTestConfig, Ledger},
    Address, Env, String,
};

pub const UNIT: i128 = 10i128.pow(DECIMALS);

/// Local ledger driven by the harness. Every call is authorized on behalf of
/// the signers, and the clock only moves through [`Sandbox::wait`].
pub struct Sandbox {
    pub env: Env,
    pub operator: Address,
}

impl Sandbox {
    pub fn new() -> Self {
        let mut env = Env::default();

        env.set_config(EnvTestConfig {
            capture_snapshot_at_drop: false,
        });
        env.mock_all_auths();

        let operator = Address::generate(&env);

        Sandbox { env, operator }
    }

    pub fn signer(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn wait(&self, seconds: u64) {
        info!(
            "\t** Jumping ahead {} seconds ({:.3} months) **",
            seconds,
            seconds as f64 / MONTH as f64
        );

        self.env.ledger().set_timestamp(self.now() + seconds);
    }
}

/// Addresses of one deployed farm, handed to every step of a scenario.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub operator: Address,
    pub fiat: Address,
    pub farm_coin: Address,
    pub farm: Address,
}

impl Deployment {
    pub fn fiat<'a>(&self, sandbox: &Sandbox) -> FakeUsdcClient<'a> {
        FakeUsdcClient::new(&sandbox.env, &self.fiat)
    }

    pub fn farm_coin<'a>(&self, sandbox: &Sandbox) -> FarmCoinClient<'a> {
        FarmCoinClient::new(&sandbox.env, &self.farm_coin)
    }

    pub fn farm<'a>(&self, sandbox: &Sandbox) -> FarmClient<'a> {
        FarmClient::new(&sandbox.env, &self.farm)
    }
}

pub fn deploy_fiat(sandbox: &Sandbox, initial_supply: i128) -> Address {
    let env = &sandbox.env;

    env.register(
        FakeUsdc,
        (
            &sandbox.operator,
            String::from_str(env, "US Dollar Coin"),
            String::from_str(env, "USDC"),
            DECIMALS,
            initial_supply,
        ),
    )
}

/// Deploys the fiat token, FarmCoin and the farm, then makes the farm the
/// FarmCoin owner so harvests can mint.
pub fn deploy(sandbox: &Sandbox, initial_supply: i128) -> Result<Deployment> {
    let env = &sandbox.env;
    let operator = sandbox.operator.clone();

    let fiat = deploy_fiat(sandbox, initial_supply);
    info!("Fiat contract deployed to: {:?}", fiat);

    let farm_coin = env.register(
        FarmCoin,
        (
            &operator,
            String::from_str(env, "FarmCoin"),
            String::from_str(env, "FRMC"),
            DECIMALS,
        ),
    );
    let farm = env.register(Farm, (&operator, &fiat, &farm_coin));
    info!("Farm deployed to: {:?}", farm);

    settle(
        "transfer FarmCoin ownership",
        FarmCoinClient::new(env, &farm_coin).try_transfer_ownership(&farm),
    )?;
    info!("FarmCoin deployed to: {:?}", farm_coin);

    Ok(Deployment {
        operator,
        fiat,
        farm_coin,
        farm,
    })
}

/// Flattens the result of a generated `try_*` client call.
pub fn settle<T, C, E, I>(step: &str, result: Result<Result<T, C>, Result<E, I>>) -> Result<T>
where
    C: Debug,
    E: Debug,
    I: Debug,
{
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(anyhow!("{step}: could not decode the result: {err:?}")),
        Err(Ok(err)) => Err(anyhow!("{step}: rejected with {err:?}")),
        Err(Err(err)) => Err(anyhow!("{step}: invocation failed: {err:?}")),
    }
}
