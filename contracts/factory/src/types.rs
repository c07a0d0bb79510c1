use soroban_sdk::{contracttype, Address};

/// Storage keys for the factory registry. The registry must survive logic
/// replacement, so new keys may only ever be appended to this enum.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Owner,
    Engine,
    Beacon,
    Version,
    AuctionCounter,
    Auction(u64),
    OwnerAuctions(Address),
}

/// Mirror of the beacon's logic descriptor (wire-compatible).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionLogic {
    V1,
    V2(i128),
}

/// Mirror of the engine's settlement choice (wire-compatible).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Settlement {
    Native,
    Token(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatedAuction {
    pub id: u64,
    pub instance: Address,
}
