use soroban_sdk::{contractimpl, Address, Env, String};

use crate::{
    storage::{get_admin, get_allowance, get_balance, get_metadata, get_total_supply},
    FakeUsdc, FakeUsdcArgs, FakeUsdcClient, LedgerTrait,
};

#[contractimpl]
impl LedgerTrait for FakeUsdc {
    fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        get_allowance(&env, &owner, &spender)
    }

    fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    fn admin(env: Env) -> Address {
        get_admin(&env)
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
