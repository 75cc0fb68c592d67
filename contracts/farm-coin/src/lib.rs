#![no_std]

use soroban_sdk::{contract, Address, Env, String};

mod contract_coin;
mod contract_ledger;
mod errors;
mod storage;
mod types;

pub use errors::Errors;

pub const DECIMALS: u32 = 6;
pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

/// Reward token minted by its owner. A deployed farm is expected to be the
/// owner so harvests can mint directly to farmers.
#[contract]
pub struct FarmCoin;

pub trait CoinTrait {
    fn mint_to_address(env: Env, caller: Address, to: Address, amount: i128);

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_ownership(env: Env, new_owner: Address);
}

pub trait LedgerTrait {
    fn owner(env: Env) -> Address;

    fn balance(env: Env, id: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn decimals(env: Env) -> u32;
}
