use soroban_sdk::{contractimpl, log, panic_with_error, symbol_short, Address, Env, String};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_balance, get_owner, get_total_supply, set_balance,
        set_metadata, set_owner, set_total_supply,
    },
    types::Metadata,
    CoinTrait, FarmCoin, FarmCoinArgs, FarmCoinClient,
};

#[contractimpl]
impl FarmCoin {
    pub fn __constructor(env: Env, owner: Address, name: String, symbol: String, decimals: u32) {
        set_owner(&env, &owner);
        set_metadata(
            &env,
            &Metadata {
                name,
                symbol,
                decimals,
            },
        );

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl CoinTrait for FarmCoin {
    fn mint_to_address(env: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();

        // role check comes first so a non-owner is rejected whatever the target
        if caller != get_owner(&env) {
            panic_with_error!(&env, &Errors::Unauthorized);
        }

        if amount <= 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        let balance = get_balance(&env, &to)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::Overflow));
        let supply = get_total_supply(&env)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::Overflow));

        set_balance(&env, &to, balance);
        set_total_supply(&env, supply);

        log!(&env, "mint_to_address", to, amount);
        env.events()
            .publish((symbol_short!("mint"), caller, to), amount);

        extend_instance_ttl(&env);
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        if amount < 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        let from_balance = get_balance(&env, &from);

        if from_balance < amount {
            panic_with_error!(&env, &Errors::InsufficientBalance);
        }

        if from != to && amount > 0 {
            let to_balance = get_balance(&env, &to)
                .checked_add(amount)
                .unwrap_or_else(|| panic_with_error!(&env, &Errors::Overflow));

            set_balance(&env, &from, from_balance - amount);
            set_balance(&env, &to, to_balance);
        }

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);

        extend_instance_ttl(&env);
    }

    fn transfer_ownership(env: Env, new_owner: Address) {
        let owner = get_owner(&env);

        owner.require_auth();

        set_owner(&env, &new_owner);

        env.events()
            .publish((symbol_short!("owner"), owner), new_owner);

        extend_instance_ttl(&env);
    }
}
