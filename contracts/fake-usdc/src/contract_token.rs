use soroban_sdk::{contractimpl, log, panic_with_error, symbol_short, Address, Env, String};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_admin, get_allowance, get_balance, get_total_supply, set_admin,
        set_allowance, set_balance, set_metadata, set_total_supply,
    },
    types::Metadata,
    FakeUsdc, FakeUsdcArgs, FakeUsdcClient, TokenTrait,
};

#[contractimpl]
impl FakeUsdc {
    pub fn __constructor(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_supply: i128,
    ) {
        if initial_supply < 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        set_admin(&env, &admin);
        set_metadata(
            &env,
            &Metadata {
                name,
                symbol,
                decimals,
            },
        );

        if initial_supply > 0 {
            credit(&env, &admin, initial_supply);

            env.events()
                .publish((symbol_short!("mint"), admin.clone(), admin), initial_supply);
        }

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl TokenTrait for FakeUsdc {
    fn mint(env: Env, minter: Address, to: Address, amount: i128) {
        minter.require_auth();

        if minter != get_admin(&env) {
            panic_with_error!(&env, &Errors::Unauthorized);
        }

        if amount <= 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        credit(&env, &to, amount);

        log!(&env, "mint", to, amount);
        env.events()
            .publish((symbol_short!("mint"), minter, to), amount);

        extend_instance_ttl(&env);
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        if amount < 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        move_balance(&env, &from, &to, amount);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);

        extend_instance_ttl(&env);
    }

    fn increase_allowance(env: Env, owner: Address, spender: Address, amount: i128) {
        owner.require_auth();

        if amount < 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        let allowance = get_allowance(&env, &owner, &spender)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::Overflow));

        set_allowance(&env, &owner, &spender, allowance);

        env.events()
            .publish((symbol_short!("approve"), owner, spender), allowance);

        extend_instance_ttl(&env);
    }

    fn decrease_allowance(env: Env, owner: Address, spender: Address, amount: i128) {
        owner.require_auth();

        if amount < 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        // both sides are non-negative so this cannot underflow
        let allowance = (get_allowance(&env, &owner, &spender) - amount).max(0);

        set_allowance(&env, &owner, &spender, allowance);

        env.events()
            .publish((symbol_short!("approve"), owner, spender), allowance);

        extend_instance_ttl(&env);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        if amount < 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        let allowance = get_allowance(&env, &from, &spender);

        if allowance < amount {
            panic_with_error!(&env, &Errors::InsufficientAllowance);
        }

        move_balance(&env, &from, &to, amount);
        set_allowance(&env, &from, &spender, allowance - amount);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);

        extend_instance_ttl(&env);
    }
}

fn credit(env: &Env, to: &Address, amount: i128) {
    let balance = get_balance(env, to)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::Overflow));
    let supply = get_total_supply(env)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::Overflow));

    set_balance(env, to, balance);
    set_total_supply(env, supply);
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    let from_balance = get_balance(env, from);

    if from_balance < amount {
        panic_with_error!(env, &Errors::InsufficientBalance);
    }

    if from == to || amount == 0 {
        return;
    }

    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::Overflow));

    set_balance(env, from, from_balance - amount);
    set_balance(env, to, to_balance);
}
