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

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Owner)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::TokenMissing))
}
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Owner, owner);
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
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .persistent()
        .set::<Storage, i128>(&balance_key, &balance);
    env.storage()
        .persistent()
        .extend_ttl::<Storage>(&balance_key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}
