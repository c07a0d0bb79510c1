use soroban_sdk::{contracttype, Address};

/// Storage keys for the factory registry. The layout is shared with the
/// previous factory logic; `FeaturedAuctions` is appended at the end so
/// every entry written by v1 decodes unchanged under v2.
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
    FeaturedAuctions,
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
