//! Registry storage. Everything lives in persistent entries, which logic
//! replacement via `update_current_contract_wasm` cannot clear.

use soroban_sdk::{Address, Env, Vec};

use crate::types::StorageKey;

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

fn extend(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&StorageKey::Initialized, &true);
}

// ========== Config ==========

pub fn get_owner(env: &Env) -> Address {
    env.storage().persistent().get(&StorageKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&StorageKey::Owner, owner);
    extend(env, &StorageKey::Owner);
}

pub fn get_engine(env: &Env) -> Address {
    env.storage().persistent().get(&StorageKey::Engine).unwrap()
}

pub fn set_engine(env: &Env, engine: &Address) {
    env.storage().persistent().set(&StorageKey::Engine, engine);
    extend(env, &StorageKey::Engine);
}

pub fn get_beacon(env: &Env) -> Address {
    env.storage().persistent().get(&StorageKey::Beacon).unwrap()
}

pub fn set_beacon(env: &Env, beacon: &Address) {
    env.storage().persistent().set(&StorageKey::Beacon, beacon);
    extend(env, &StorageKey::Beacon);
}

// ========== Logic version ==========

pub fn get_version(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&StorageKey::Version)
        .unwrap_or(1)
}

pub fn set_version(env: &Env, version: u32) {
    env.storage()
        .persistent()
        .set(&StorageKey::Version, &version);
    extend(env, &StorageKey::Version);
}

// ========== Auction counter ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&StorageKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .persistent()
        .set(&StorageKey::AuctionCounter, &counter);
    extend(env, &StorageKey::AuctionCounter);
    counter
}

// ========== Auction index ==========

pub fn get_auction_instance(env: &Env, id: u64) -> Option<Address> {
    let key = StorageKey::Auction(id);
    let instance = env.storage().persistent().get::<_, Address>(&key);
    if instance.is_some() {
        extend(env, &key);
    }
    instance
}

pub fn set_auction_instance(env: &Env, id: u64, instance: &Address) {
    let key = StorageKey::Auction(id);
    env.storage().persistent().set(&key, instance);
    extend(env, &key);
}

// ========== Auctions by owner index ==========

pub fn get_owner_auctions(env: &Env, owner: &Address) -> Vec<u64> {
    let key = StorageKey::OwnerAuctions(owner.clone());
    let auctions = env
        .storage()
        .persistent()
        .get::<_, Vec<u64>>(&key)
        .unwrap_or(Vec::new(env));
    if !auctions.is_empty() {
        extend(env, &key);
    }
    auctions
}

pub fn add_owner_auction(env: &Env, owner: &Address, id: u64) {
    let key = StorageKey::OwnerAuctions(owner.clone());
    let mut auctions = get_owner_auctions(env, owner);
    auctions.push_back(id);
    env.storage().persistent().set(&key, &auctions);
    extend(env, &key);
}
