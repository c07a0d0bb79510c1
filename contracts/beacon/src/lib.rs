#![no_std]

use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    StorageIncompatibleUpgrade = 4,
}

/// Shared auction logic descriptor. Every auction resolves this from the
/// beacon on each call, so swapping it changes behavior for all existing
/// and future auctions at once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionLogic {
    /// Baseline rules: any strictly greater bid is accepted.
    V1,
    /// A raise must additionally meet a minimum increment step.
    V2(i128),
}

impl AuctionLogic {
    pub fn version(&self) -> u32 {
        match self {
            AuctionLogic::V1 => 1,
            AuctionLogic::V2(_) => 2,
        }
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Implementation,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeaconInitialized {
    #[topic]
    pub owner: Address,
    pub version: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeaconUpgraded {
    #[topic]
    pub version: u32,
    pub implementation: AuctionLogic,
}

#[contract]
pub struct Beacon;

#[contractimpl]
impl Beacon {
    pub fn initialize(env: Env, owner: Address, implementation: AuctionLogic) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Implementation, &implementation);

        BeaconInitialized {
            owner,
            version: implementation.version(),
        }
        .publish(&env);

        Ok(())
    }

    pub fn current_implementation(env: Env) -> Result<AuctionLogic, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Implementation)
            .ok_or(Error::NotInitialized)
    }

    pub fn current_version(env: Env) -> Result<u32, Error> {
        Ok(Self::current_implementation(env)?.version())
    }

    /// Swap the shared logic descriptor. Downgrades are rejected: older
    /// logic may misread fields written under a newer descriptor.
    pub fn set_implementation(
        env: Env,
        caller: Address,
        implementation: AuctionLogic,
    ) -> Result<(), Error> {
        caller.require_auth();

        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        if caller != owner {
            return Err(Error::Unauthorized);
        }

        let current: AuctionLogic = env
            .storage()
            .instance()
            .get(&DataKey::Implementation)
            .ok_or(Error::NotInitialized)?;
        if implementation.version() < current.version() {
            return Err(Error::StorageIncompatibleUpgrade);
        }

        env.storage()
            .instance()
            .set(&DataKey::Implementation, &implementation);

        BeaconUpgraded {
            version: implementation.version(),
            implementation,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }
}
