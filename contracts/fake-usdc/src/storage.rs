use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    errors::Errors,
    types::{Metadata, Storage},
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

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Admin)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::TokenMissing))
}
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Admin, admin);
}

pub fn get_metadata(env: &Env) -> Metadata {
    env.storage()
        .instance()
        .get::<Storage, Metadata>(&Storage::Metadata)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::TokenMissing))
}
pub fn set_metadata(env: &Env, metadata: &Metadata) {
    env.storage()
        .instance()
        .set::<Storage, Metadata>(&Storage::Metadata, metadata);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get::<Storage, i128>(&Storage::TotalSupply)
        .unwrap_or(0)
}
pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage()
        .instance()
        .set::<Storage, i128>(&Storage::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let balance_key = Storage::Balance(id.clone());

    env.storage()
        .persistent()
        .get::<Storage, i128>(&balance_key)
        .unwrap_or(0)
}
pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let balance_key = Storage::Balance(id.clone());

    env.storage()
        .persistent()
        .set::<Storage, i128>(&balance_key, &balance);

    extend_persistent_ttl(env, &balance_key);
}

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let allowance_key = Storage::Allowance(owner.clone(), spender.clone());

    env.storage()
        .persistent()
        .get::<Storage, i128>(&allowance_key)
        .unwrap_or(0)
}
pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, allowance: i128) {
    let allowance_key = Storage::Allowance(owner.clone(), spender.clone());

    if allowance == 0 {
        env.storage().persistent().remove::<Storage>(&allowance_key);
        return;
    }

    env.storage()
        .persistent()
        .set::<Storage, i128>(&allowance_key, &allowance);

    extend_persistent_ttl(env, &allowance_key);
}
