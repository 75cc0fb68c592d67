use soroban_sdk::{contractimpl, panic_with_error, symbol_short, Address, BytesN, Env};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_farm_admin, get_farm_paused, get_fiat_asset, get_reward_asset,
        set_farm_admin, set_farm_paused, set_fiat_asset, set_reward_asset,
    },
    AdminTrait, Farm, FarmArgs, FarmClient,
};

#[contractimpl]
impl Farm {
    /// `farm_coin` must hand its ownership to this contract before the first
    /// harvest, otherwise harvesting fails with `RewardNotOwned`.
    pub fn __constructor(env: Env, admin: Address, fiat: Address, farm_coin: Address) {
        set_farm_admin(&env, &admin);
        set_fiat_asset(&env, &fiat);
        set_reward_asset(&env, &farm_coin);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl AdminTrait for Farm {
    fn pause(env: Env) {
        let admin = get_farm_admin(&env);
        let paused = get_farm_paused(&env);

        admin.require_auth();

        if paused {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        set_farm_paused(&env, true);

        env.events().publish((symbol_short!("paused"),), admin);

        extend_instance_ttl(&env);
    }

    fn unpause(env: Env) {
        let admin = get_farm_admin(&env);
        let paused = get_farm_paused(&env);

        admin.require_auth();

        if !paused {
            panic_with_error!(&env, &Errors::FarmNotPaused);
        }

        set_farm_paused(&env, false);

        env.events().publish((symbol_short!("unpaused"),), admin);

        extend_instance_ttl(&env);
    }

    fn upgrade(env: Env, hash: BytesN<32>) {
        let admin = get_farm_admin(&env);

        admin.require_auth();

        env.deployer().update_current_contract_wasm(hash);

        extend_instance_ttl(&env);
    }

    fn admin(env: Env) -> Address {
        get_farm_admin(&env)
    }

    fn fiat(env: Env) -> Address {
        get_fiat_asset(&env)
    }

    fn farm_coin(env: Env) -> Address {
        get_reward_asset(&env)
    }
}
