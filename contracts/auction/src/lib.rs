#![no_std]

mod events;
pub mod logic;
mod nft;
mod storage;
pub mod types;

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};

use events::{AuctionEnded, AuctionOpened, BidPlaced};
use logic::AuctionLogic;
use types::{Auction, AuctionStatus, Bid, BidKind, Settlement};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    CallerNotFactory = 3,
    Unauthorized = 4,
    AuctionNotFound = 5,
    AuctionExists = 6,
    InvalidTimeRange = 7,
    NotActive = 8,
    NotYetStarted = 9,
    AlreadyExpired = 10,
    BidTooLow = 11,
    PaymentMismatch = 12,
    BidNotFound = 13,
}

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        factory: Address,
        beacon: Address,
        native_token: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_factory(&env, &factory);
        storage::set_beacon(&env, &beacon);
        storage::set_native_token(&env, &native_token);

        Ok(())
    }

    /// Open a new auction record. Factory-only: the factory assigns the id
    /// and has already authenticated the seller. The asset moves into
    /// engine custody atomically with record creation.
    pub fn create_auction(
        env: Env,
        caller: Address,
        id: u64,
        seller: Address,
        collection: Address,
        item: u64,
        start_time: u64,
        end_time: u64,
        settlement: Settlement,
    ) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        if caller != storage::get_factory(&env) {
            return Err(Error::CallerNotFactory);
        }
        if end_time <= start_time {
            return Err(Error::InvalidTimeRange);
        }
        if storage::get_auction(&env, id).is_some() {
            return Err(Error::AuctionExists);
        }
        if nft::owner_of(&env, &collection, item) != seller {
            return Err(Error::Unauthorized);
        }

        nft::transfer(
            &env,
            &collection,
            &seller,
            &env.current_contract_address(),
            item,
        );

        let auction = Auction {
            id,
            seller: seller.clone(),
            collection,
            item,
            start_time,
            end_time,
            settlement,
            status: AuctionStatus::Active,
            highest_bid: 0,
            highest_bidder: None,
        };
        storage::save_auction(&env, &auction);

        AuctionOpened {
            auction_id: id,
            seller,
        }
        .publish(&env);

        Ok(id)
    }

    pub fn place_bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        bidder.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.status != AuctionStatus::Active {
            return Err(Error::NotActive);
        }

        // Bidding window is half-open: a bid exactly at end_time is late.
        let now = env.ledger().timestamp();
        if now < auction.start_time {
            return Err(Error::NotYetStarted);
        }
        if now >= auction.end_time {
            return Err(Error::AlreadyExpired);
        }

        let current_logic = logic::resolve(&env, &storage::get_beacon(&env));
        logic::validate_raise(&current_logic, auction.highest_bid, amount)?;

        // Refund the outbid deposit before taking the new one, so at most
        // one bidder's funds are ever held per auction.
        if let Some(previous_bidder) = &auction.highest_bidder {
            refund_bidder(&env, &auction, previous_bidder);
        }

        escrow_bid(&env, &auction, &bidder, amount)?;

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());

        let kind = bid_kind(&auction.settlement);
        let bid = Bid {
            bidder: bidder.clone(),
            amount,
            kind,
            timestamp: now,
        };
        storage::add_bid_to_history(&env, auction_id, bid);
        storage::save_auction(&env, &auction);

        BidPlaced {
            auction_id,
            bidder,
            amount,
            kind,
        }
        .publish(&env);

        Ok(())
    }

    /// Finalize an auction. The seller may end early; anyone else must
    /// wait for natural expiry. Terminal states reject a second call, so
    /// transfers can never re-execute.
    pub fn end_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.status != AuctionStatus::Active {
            return Err(Error::NotActive);
        }

        let now = env.ledger().timestamp();
        if now < auction.end_time && caller != auction.seller {
            return Err(Error::Unauthorized);
        }

        let contract_address = env.current_contract_address();

        match auction.highest_bidder.clone() {
            Some(winner) => {
                // Commit the terminal status before any transfer leaves
                // the contract.
                auction.status = AuctionStatus::Ended;
                storage::save_auction(&env, &auction);

                let settlement_token = settlement_token(&env, &auction.settlement);
                let token_client = token::Client::new(&env, &settlement_token);
                token_client.transfer(&contract_address, &auction.seller, &auction.highest_bid);
                storage::remove_escrowed_funds(&env, auction_id, &winner);

                nft::transfer(
                    &env,
                    &auction.collection,
                    &contract_address,
                    &winner,
                    auction.item,
                );

                AuctionEnded {
                    auction_id,
                    winner: Some(winner),
                    winning_amount: auction.highest_bid,
                }
                .publish(&env);
            }
            None => {
                auction.status = AuctionStatus::Cancelled;
                storage::save_auction(&env, &auction);

                nft::transfer(
                    &env,
                    &auction.collection,
                    &contract_address,
                    &auction.seller,
                    auction.item,
                );

                AuctionEnded {
                    auction_id,
                    winner: None,
                    winning_amount: 0,
                }
                .publish(&env);
            }
        }

        Ok(())
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_status(env: Env, auction_id: u64) -> Result<AuctionStatus, Error> {
        Ok(Self::get_auction(env, auction_id)?.status)
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_bids(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_bid_history(&env, auction_id))
    }

    pub fn get_bid_count(env: Env, auction_id: u64) -> Result<u32, Error> {
        Ok(Self::get_bids(env, auction_id)?.len())
    }

    pub fn get_bid(env: Env, auction_id: u64, index: u32) -> Result<Bid, Error> {
        Self::get_bids(env, auction_id)?
            .get(index)
            .ok_or(Error::BidNotFound)
    }

    /// The logic descriptor the engine would apply right now.
    pub fn current_logic(env: Env) -> Result<AuctionLogic, Error> {
        Self::require_initialized(&env)?;
        Ok(logic::resolve(&env, &storage::get_beacon(&env)))
    }

    pub fn get_factory(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_factory(&env))
    }

    pub fn get_beacon(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_beacon(&env))
    }

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }
}

fn bid_kind(settlement: &Settlement) -> BidKind {
    match settlement {
        Settlement::Native => BidKind::Native,
        Settlement::Token(_) => BidKind::Fungible,
    }
}

fn settlement_token(env: &Env, settlement: &Settlement) -> Address {
    match settlement {
        Settlement::Native => storage::get_native_token(env),
        Settlement::Token(token) => token.clone(),
    }
}

fn escrow_bid(env: &Env, auction: &Auction, bidder: &Address, amount: i128) -> Result<(), Error> {
    let token_client = token::Client::new(env, &settlement_token(env, &auction.settlement));
    // The transfer's own result is authoritative; a failed or partial
    // deposit rejects the bid with no state change.
    match token_client.try_transfer(bidder, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => return Err(Error::PaymentMismatch),
    }
    storage::set_escrowed_funds(env, auction.id, bidder, amount);
    Ok(())
}

fn refund_bidder(env: &Env, auction: &Auction, bidder: &Address) {
    let escrowed_amount = storage::get_escrowed_funds(env, auction.id, bidder);
    if escrowed_amount > 0 {
        let token_client = token::Client::new(env, &settlement_token(env, &auction.settlement));
        token_client.transfer(&env.current_contract_address(), bidder, &escrowed_amount);
        storage::remove_escrowed_funds(env, auction.id, bidder);
    }
}

#[cfg(test)]
mod test;
