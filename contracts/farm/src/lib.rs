#![no_std]

use soroban_sdk::{contract, contractclient, Address, BytesN, Env, Vec};

mod contract_admin;
mod contract_farm;
mod errors;
mod reward;
mod storage;
mod tests;
mod types;

pub use errors::Errors;
pub use types::{Deposit, DepositStatus, Farmer};

pub const DECIMALS: u32 = 6;
pub const DAY: u64 = 60 * 60 * 24;
pub const MONTH: u64 = 30 * DAY;
pub const YEAR: u64 = 365 * DAY;
pub const BPS: i128 = 10_000;
pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

// (lock months, annual reward rate in bps)
pub const LOCK_TIERS: [(u32, i128); 3] = [(0, 1_000), (6, 2_000), (12, 3_000)];

#[contract]
pub struct Farm;

#[contractclient(name = "FiatClient")]
pub trait FiatInterface {
    fn balance(env: Env, id: Address) -> i128;

    fn allowance(env: Env, owner: Address, spender: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
}

#[contractclient(name = "RewardClient")]
pub trait RewardInterface {
    fn owner(env: Env) -> Address;

    fn mint_to_address(env: Env, caller: Address, to: Address, amount: i128);
}

pub trait AdminTrait {
    fn pause(env: Env);

    fn unpause(env: Env);

    fn upgrade(env: Env, hash: BytesN<32>);

    fn admin(env: Env) -> Address;

    fn fiat(env: Env) -> Address;

    fn farm_coin(env: Env) -> Address;
}

pub trait FarmTrait {
    fn deposit(env: Env, farmer: Address, amount: i128, lock_months: u32) -> u32;

    fn withdraw(env: Env, farmer: Address, amount: i128) -> i128;

    fn harvest(env: Env, farmer: Address) -> i128;

    fn deposits(env: Env, farmer: Address) -> Vec<Deposit>;

    fn status(env: Env, farmer: Address, id: u32) -> DepositStatus;

    fn principal(env: Env, farmer: Address) -> i128;

    fn withdrawable(env: Env, farmer: Address) -> i128;

    fn pending_reward(env: Env, farmer: Address) -> i128;

    fn farmer(env: Env, farmer: Address) -> Farmer;

    fn lock_tiers(env: Env) -> Vec<u32>;
}
