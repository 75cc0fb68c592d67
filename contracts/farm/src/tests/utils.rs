#![cfg(test)]

use fake_usdc::{FakeUsdc, FakeUsdcClient};
use farm_coin::{FarmCoin, FarmCoinClient};
use soroban_sdk::{
    testutils::{Address as _, EnvTestConfig, Ledger},
    Address, Env, String,
};

use crate::{Farm, FarmClient, DECIMALS};

pub const UNIT: i128 = 10i128.pow(DECIMALS);

pub struct Setup<'a> {
    pub env: Env,
    pub admin: Address,
    pub usdc: FakeUsdcClient<'a>,
    pub coin: FarmCoinClient<'a>,
    pub farm: FarmClient<'a>,
}

impl Setup<'_> {
    pub fn new() -> Self {
        let setup = Self::without_coin_ownership();

        setup.coin.transfer_ownership(&setup.farm.address);

        setup
    }

    /// FarmCoin stays owned by the admin.
    pub fn without_coin_ownership() -> Self {
        let mut env = Env::default();

        env.set_config(EnvTestConfig {
            capture_snapshot_at_drop: false,
        });
        env.mock_all_auths();

        let admin = Address::generate(&env);

        let usdc_address = env.register(
            FakeUsdc,
            (
                &admin,
                String::from_str(&env, "US Dollar Coin"),
                String::from_str(&env, "USDC"),
                DECIMALS,
                0i128,
            ),
        );
        let coin_address = env.register(
            FarmCoin,
            (
                &admin,
                String::from_str(&env, "FarmCoin"),
                String::from_str(&env, "FRMC"),
                DECIMALS,
            ),
        );
        let farm_address = env.register(Farm, (&admin, &usdc_address, &coin_address));

        let usdc = FakeUsdcClient::new(&env, &usdc_address);
        let coin = FarmCoinClient::new(&env, &coin_address);
        let farm = FarmClient::new(&env, &farm_address);

        Setup {
            env,
            admin,
            usdc,
            coin,
            farm,
        }
    }

    /// A fresh farmer holding `amount` USDC, all of it approved to the farm.
    pub fn farmer(&self, amount: i128) -> Address {
        let farmer = Address::generate(&self.env);

        self.usdc.mint(&self.admin, &farmer, &amount);
        self.usdc
            .increase_allowance(&farmer, &self.farm.address, &amount);

        farmer
    }

    pub fn forward(&self, seconds: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp() + seconds);
    }
}
