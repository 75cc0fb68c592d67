#![no_std]

use soroban_sdk::{contract, Address, Env, String};

mod contract_ledger;
mod contract_token;
mod errors;
mod storage;
mod types;

pub use errors::Errors;

pub const DECIMALS: u32 = 6;
pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

#[contract]
pub struct FakeUsdc;

pub trait TokenTrait {
    fn mint(env: Env, minter: Address, to: Address, amount: i128);

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn increase_allowance(env: Env, owner: Address, spender: Address, amount: i128);

    fn decrease_allowance(env: Env, owner: Address, spender: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
}

pub trait LedgerTrait {
    fn balance(env: Env, id: Address) -> i128;

    fn allowance(env: Env, owner: Address, spender: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn admin(env: Env) -> Address;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn decimals(env: Env) -> u32;
}
