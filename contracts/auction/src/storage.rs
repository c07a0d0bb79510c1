use soroban_sdk::{Address, Env, Vec};

use crate::types::{Auction, Bid, DataKey};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ========== Config ==========

pub fn get_factory(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Factory).unwrap()
}

pub fn set_factory(env: &Env, factory: &Address) {
    env.storage().instance().set(&DataKey::Factory, factory);
}

pub fn get_beacon(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Beacon).unwrap()
}

pub fn set_beacon(env: &Env, beacon: &Address) {
    env.storage().instance().set(&DataKey::Beacon, beacon);
}

pub fn get_native_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::NativeToken).unwrap()
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

// ========== Auctions ==========

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Bid history ==========

pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = DataKey::BidHistory(auction_id);
    let history = env
        .storage()
        .persistent()
        .get::<_, Vec<Bid>>(&key)
        .unwrap_or(Vec::new(env));
    if !history.is_empty() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    history
}

pub fn add_bid_to_history(env: &Env, auction_id: u64, bid: Bid) {
    let key = DataKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Escrowed funds ==========

pub fn get_escrowed_funds(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = DataKey::EscrowedFunds(auction_id, bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_escrowed_funds(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = DataKey::EscrowedFunds(auction_id, bidder.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_escrowed_funds(env: &Env, auction_id: u64, bidder: &Address) {
    let key = DataKey::EscrowedFunds(auction_id, bidder.clone());
    env.storage().persistent().remove(&key);
}
