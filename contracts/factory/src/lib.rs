#![no_std]

mod errors;
mod events;
mod storage;
pub mod types;

use soroban_sdk::{
    contract, contractimpl, vec, Address, BytesN, Env, IntoVal, Symbol, Val, Vec,
};

use errors::Error;
use events::{AuctionCreated, FactoryInitialized, FactoryUpgraded, OwnerChanged};
use types::{AuctionLogic, CreatedAuction, Settlement};

const LOGIC_VERSION: u32 = 1;

#[contract]
pub struct AuctionFactory;

#[contractimpl]
impl AuctionFactory {
    // ========== INITIALIZATION ==========

    /// Initialize the factory and take ownership of the beacon. The beacon
    /// is initialized with this contract as its owner, so implementation
    /// swaps can only flow through `update_beacon`.
    pub fn initialize(
        env: Env,
        owner: Address,
        engine: Address,
        beacon: Address,
        implementation: AuctionLogic,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        storage::set_initialized(&env);
        storage::set_owner(&env, &owner);
        storage::set_engine(&env, &engine);
        storage::set_beacon(&env, &beacon);
        storage::set_version(&env, LOGIC_VERSION);

        Self::call_beacon_initialize(&env, &beacon, &implementation);

        FactoryInitialized {
            owner,
            engine,
            beacon,
        }
        .publish(&env);

        Ok(())
    }

    // ========== AUCTION CREATION ==========

    /// Open a new auction for the seller's asset. The engine takes custody
    /// of the asset; the new auction is bound to the shared beacon, never
    /// to a frozen logic snapshot.
    pub fn create_auction(
        env: Env,
        seller: Address,
        collection: Address,
        item: u64,
        start_time: u64,
        end_time: u64,
        settlement: Settlement,
    ) -> Result<CreatedAuction, Error> {
        Self::require_initialized(&env)?;
        seller.require_auth();

        // Checked before the id is assigned: a failed creation leaves the
        // registry count unchanged.
        if end_time <= start_time {
            return Err(Error::InvalidTimeRange);
        }

        let id = storage::increment_auction_counter(&env);
        let engine = storage::get_engine(&env);

        Self::call_engine_create(
            &env,
            &engine,
            id,
            &seller,
            &collection,
            item,
            start_time,
            end_time,
            &settlement,
        );

        storage::set_auction_instance(&env, id, &engine);
        storage::add_owner_auction(&env, &seller, id);

        AuctionCreated {
            id,
            instance: engine.clone(),
            seller,
        }
        .publish(&env);

        Ok(CreatedAuction {
            id,
            instance: engine,
        })
    }

    // ========== REGISTRY QUERIES ==========

    pub fn get_auction(env: Env, id: u64) -> Result<Address, Error> {
        storage::get_auction_instance(&env, id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_auctions_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    pub fn get_user_auctions(env: Env, owner: Address) -> Vec<u64> {
        storage::get_owner_auctions(&env, &owner)
    }

    // ========== UPGRADES ==========

    /// Swap the shared auction logic for every existing and future auction
    /// at once.
    pub fn update_beacon(
        env: Env,
        caller: Address,
        implementation: AuctionLogic,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &caller)?;

        let beacon = storage::get_beacon(&env);
        Self::call_beacon_set_implementation(&env, &beacon, &implementation);

        Ok(())
    }

    /// Replace the factory's own logic while the registry stays in place.
    /// Replacement logic must understand every stored field, so version
    /// rollbacks are refused.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
        new_version: u32,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &caller)?;

        if new_version < storage::get_version(&env) {
            return Err(Error::StorageIncompatibleUpgrade);
        }
        storage::set_version(&env, new_version);

        FactoryUpgraded {
            version: new_version,
            wasm_hash: new_wasm_hash.clone(),
        }
        .publish(&env);

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    pub fn version(env: Env) -> u32 {
        storage::get_version(&env)
    }

    // ========== ACCESS CONTROL ==========

    pub fn set_owner(env: Env, current_owner: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &current_owner)?;

        storage::set_owner(&env, &new_owner);

        OwnerChanged {
            old_owner: current_owner,
            new_owner,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_owner(&env))
    }

    pub fn get_engine(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_engine(&env))
    }

    pub fn get_beacon(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_beacon(&env))
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::get_owner(env) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn call_beacon_initialize(env: &Env, beacon: &Address, implementation: &AuctionLogic) {
        let caller = env.current_contract_address();
        let args: Vec<Val> = vec![env, caller.into_val(env), implementation.into_val(env)];
        env.invoke_contract::<()>(beacon, &Symbol::new(env, "initialize"), args);
    }

    fn call_beacon_set_implementation(env: &Env, beacon: &Address, implementation: &AuctionLogic) {
        let caller = env.current_contract_address();
        let args: Vec<Val> = vec![env, caller.into_val(env), implementation.into_val(env)];
        env.invoke_contract::<()>(beacon, &Symbol::new(env, "set_implementation"), args);
    }

    fn call_engine_create(
        env: &Env,
        engine: &Address,
        id: u64,
        seller: &Address,
        collection: &Address,
        item: u64,
        start_time: u64,
        end_time: u64,
        settlement: &Settlement,
    ) {
        let caller = env.current_contract_address();
        let args: Vec<Val> = vec![
            env,
            caller.into_val(env),
            id.into_val(env),
            seller.into_val(env),
            collection.into_val(env),
            item.into_val(env),
            start_time.into_val(env),
            end_time.into_val(env),
            settlement.into_val(env),
        ];
        let _: u64 = env.invoke_contract(engine, &Symbol::new(env, "create_auction"), args);
    }
}
