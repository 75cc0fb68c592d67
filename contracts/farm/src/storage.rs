use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::{
    errors::Errors,
    types::{Deposit, Farmer, Storage},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

fn extend_persistent_ttl(env: &Env, key: &Storage) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .persistent()
        .extend_ttl::<Storage>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_farm_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Admin)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::FarmMissing))
}
pub fn set_farm_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Admin, admin);
}

pub fn get_fiat_asset(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::FiatAsset)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::FarmMissing))
}
pub fn set_fiat_asset(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::FiatAsset, asset);
}

pub fn get_reward_asset(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::RewardAsset)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::FarmMissing))
}
pub fn set_reward_asset(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::RewardAsset, asset);
}

pub fn get_farm_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<Storage, bool>(&Storage::FarmPaused)
        .unwrap_or(false)
}
pub fn set_farm_paused(env: &Env, paused: bool) {
    env.storage()
        .instance()
        .set::<Storage, bool>(&Storage::FarmPaused, &paused);
}

pub fn get_farmer(env: &Env, farmer: &Address) -> Farmer {
    let farmer_key = Storage::Farmer(farmer.clone());

    env.storage()
        .persistent()
        .get::<Storage, Farmer>(&farmer_key)
        .unwrap_or_default()
}
pub fn set_farmer(env: &Env, farmer: &Address, account: &Farmer) {
    let farmer_key = Storage::Farmer(farmer.clone());

    env.storage()
        .persistent()
        .set::<Storage, Farmer>(&farmer_key, account);

    extend_persistent_ttl(env, &farmer_key);
}

pub fn get_deposits(env: &Env, farmer: &Address) -> Vec<Deposit> {
    let deposits_key = Storage::Deposits(farmer.clone());

    env.storage()
        .persistent()
        .get::<Storage, Vec<Deposit>>(&deposits_key)
        .unwrap_or_else(|| Vec::new(env))
}
pub fn set_deposits(env: &Env, farmer: &Address, deposits: &Vec<Deposit>) {
    let deposits_key = Storage::Deposits(farmer.clone());

    if deposits.is_empty() {
        env.storage().persistent().remove::<Storage>(&deposits_key);
        return;
    }

    env.storage()
        .persistent()
        .set::<Storage, Vec<Deposit>>(&deposits_key, deposits);

    extend_persistent_ttl(env, &deposits_key);
}
