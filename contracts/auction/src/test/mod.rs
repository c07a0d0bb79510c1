pub mod bidding_test;

use crate::types::Settlement;
use crate::{AuctionContract, AuctionContractClient};
use auction_beacon::{AuctionLogic as BeaconLogic, Beacon, BeaconClient};
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env,
};

pub const ITEM: u64 = 1;
pub const START_TIME: u64 = 1005;
pub const END_TIME: u64 = 2000;

/// Minimal asset-custody collaborator: a single-owner-per-item registry
/// with the `transfer`/`owner_of` surface the engine invokes.
#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    pub fn mint(env: Env, to: Address, item: u64) {
        env.storage().persistent().set(&item, &to);
    }

    pub fn transfer(env: Env, from: Address, to: Address, item: u64) {
        from.require_auth();
        let owner: Address = env.storage().persistent().get(&item).unwrap();
        assert_eq!(owner, from);
        env.storage().persistent().set(&item, &to);
    }

    pub fn owner_of(env: Env, item: u64) -> Address {
        env.storage().persistent().get(&item).unwrap()
    }
}

pub fn setup_test() -> (
    Env,
    AuctionContractClient<'static>,
    Address, // admin (owns the beacon)
    Address, // factory
    Address, // seller
    Address, // bidder1
    Address, // bidder2
    Address, // nft collection
    Address, // settlement token
) {
    let env = Env::default();
    env.mock_all_auths_allowing_non_root_auth();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 1000000,
    });

    let admin = Address::generate(&env);
    let factory = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);

    let beacon_id = env.register(Beacon, ());
    BeaconClient::new(&env, &beacon_id).initialize(&admin, &BeaconLogic::V1);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);
    token_admin_client.mint(&bidder1, &10_000_000);
    token_admin_client.mint(&bidder2, &10_000_000);

    let nft_address = env.register(MockNft, ());
    MockNftClient::new(&env, &nft_address).mint(&seller, &ITEM);

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);
    client.initialize(&admin, &factory, &beacon_id, &token_address);

    (
        env,
        client,
        admin,
        factory,
        seller,
        bidder1,
        bidder2,
        nft_address,
        token_address,
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp() + seconds,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 1000000,
    });
}

/// Open auction id 1 over the default item with token settlement.
pub fn create_default_auction(
    client: &AuctionContractClient,
    factory: &Address,
    seller: &Address,
    nft_address: &Address,
    token_address: &Address,
) -> u64 {
    client.create_auction(
        factory,
        &1,
        seller,
        nft_address,
        &ITEM,
        &START_TIME,
        &END_TIME,
        &Settlement::Token(token_address.clone()),
    )
}
