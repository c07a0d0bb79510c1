use soroban_sdk::{contractevent, Address, BytesN};

/// Event emitted when the factory is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitialized {
    #[topic]
    pub owner: Address,
    pub engine: Address,
    pub beacon: Address,
}

/// Event emitted when a new auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub id: u64,
    pub instance: Address,
    pub seller: Address,
}

/// Event emitted when the factory replaces its own logic
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryUpgraded {
    #[topic]
    pub version: u32,
    pub wasm_hash: BytesN<32>,
}

/// Event emitted when factory ownership is handed over
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChanged {
    #[topic]
    pub old_owner: Address,
    pub new_owner: Address,
}

/// Event emitted when an auction's featured flag is toggled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFeatured {
    #[topic]
    pub id: u64,
    pub featured: bool,
}
