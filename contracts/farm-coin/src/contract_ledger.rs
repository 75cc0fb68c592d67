use soroban_sdk::{contractimpl, Address, Env, String};

use crate::{
    storage::{get_balance, get_metadata, get_owner, get_total_supply},
    FarmCoin, FarmCoinArgs, FarmCoinClient, LedgerTrait,
};

#[contractimpl]
impl LedgerTrait for FarmCoin {
    fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }
}
